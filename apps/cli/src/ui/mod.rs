pub mod chart;
pub mod table;
pub mod theme;

pub use theme::{Icon, RiskBand, Theme};

pub fn heading(icon: Icon, title: impl AsRef<str>) {
    println!("\n{} {}", icon, Theme::primary(title.as_ref()));
}

pub fn println(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}
