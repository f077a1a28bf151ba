use ansi_term::{Color, Style};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref RED: Style = Color::Fixed(9).bold();
    pub static ref CYAN: Style = Color::Fixed(14).bold();
    pub static ref WHITE: Style = Color::Fixed(15).bold();
}
