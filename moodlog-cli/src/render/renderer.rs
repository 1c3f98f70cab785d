use moodlog_core::Entry;
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        let mut skin = MadSkin::default();
        skin.headers[0].set_fg(Color::Red);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.bullet.set_fg(Color::Red);
        Self {
            skin,
            opts: config.unwrap_or(RenderOptions {
                date_format: "%a, %d %b %Y".to_string(),
                use_color: true,
            }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_plain(&self, text: &str) {
        println!("{text}");
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One line per entry: date, moods, word count and time spent.
    pub fn print_entry_line(&self, entry: &Entry) {
        let mut date = match entry.date() {
            Ok(d) => d.format(&self.opts.date_format).to_string(),
            Err(_) => entry.path.display().to_string(),
        };
        let m = &entry.metadata;
        let mut moods = format!(
            "high {} · low {} · avg {}",
            rating(m.high_mood),
            rating(m.low_mood),
            rating(m.average_mood)
        );
        let mut words = format!("{} words", entry.words().len());
        let mut spent = duration(m.seconds);
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            moods = moods.with(Color::Yellow).to_string();
            words = words.with(Color::Green).to_string();
            spent = spent.with(Color::Blue).to_string();
        }
        println!("{date}  {moods}  {words}  {spent}");
    }
}

fn rating(value: u8) -> String {
    if value == 0 {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn duration(seconds: u16) -> String {
    match (seconds / 60, seconds % 60) {
        (0, s) => format!("{s}s"),
        (m, s) => format!("{m}m {s:02}s"),
    }
}
