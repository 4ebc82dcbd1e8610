use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub normal: Style,
    pub title: Style,
    pub caption: Style,
    pub heading: Style,
    pub button: Style,
    pub code: Style,
    pub description: Style,
    pub spinner: Style,
    pub warning: Style,
    pub error: Style,
    pub help: Style,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        if name == "light" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn dark() -> Self {
        Self {
            normal: Style::default().fg(Color::White),
            title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            caption: Style::default().fg(Color::Gray),
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Green),
            description: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            spinner: Style::default().fg(Color::Cyan),
            warning: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            help: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn light() -> Self {
        Self {
            normal: Style::default().fg(Color::Black),
            title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            caption: Style::default().fg(Color::DarkGray),
            heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(Color::Magenta),
            description: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            spinner: Style::default().fg(Color::Blue),
            warning: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            help: Style::default().fg(Color::Gray),
        }
    }
}
