mod content;
mod footer;
mod header;
mod layout;
mod progress;
mod theme;

pub use content::ContentView;
pub use footer::Footer;
pub use header::Header;
pub use layout::AppLayout;
pub use theme::Theme;
