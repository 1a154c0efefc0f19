//! The built-in colour-name tables, one static slice per [`Family`]. Entries are `(name, [r, g, b])`
//! and every colour is fully opaque. The tables are kept in the order their sources list them; the
//! search engine never relies on that order.
//!
//! [`Family`]: ../family/enum.Family.html

mod cga;
mod crayola;
mod farrow_and_ball;
mod html;
mod pantone;
mod web;
mod x11;

use crate::family::Family;

/// The raw table behind a family.
pub(crate) fn table(family: Family) -> &'static [(&'static str, [u8; 3])] {
    match family {
        Family::Web => web::WEB_COLOURS,
        Family::Cga => cga::CGA_COLOURS,
        Family::Html => html::HTML_COLOURS,
        Family::X11 => x11::X11_COLOURS,
        Family::Pantone => pantone::PANTONE_COLOURS,
        Family::FarrowAndBall => farrow_and_ball::FARROW_AND_BALL_COLOURS,
        Family::Crayola => crayola::CRAYOLA_COLOURS,
    }
}
