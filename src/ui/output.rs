use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    let line = theme().with_icon(Icons::ROCKET, text);
    println!("{}", line.style(theme().header.clone()));
}

pub fn success(label: &str) {
    let line = theme().with_icon(Icons::CHECK, label);
    println!("{}", line.style(theme().success.clone()));
}

pub fn info(icon: &str, label: &str, value: &str) {
    let label = format!("{}:", label.style(theme().dim.clone()));
    println!("{} {}", theme().with_icon(&icon.style(theme().info.clone()).to_string(), &label), value);
}
