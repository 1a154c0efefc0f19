//! The CGA text-mode palette. These are the same sixteen values as the Web colours but under the
//! names the IBM palette gave them. The order here is the palette order, so the position of an entry
//! is its CGA colour number.

pub(crate) static CGA_COLOURS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("dark blue", [0x00, 0x00, 0x80]),
    ("dark green", [0x00, 0x80, 0x00]),
    ("dark cyan", [0x00, 0x80, 0x80]),
    ("dark red", [0x80, 0x00, 0x00]),
    ("dark magenta", [0x80, 0x00, 0x80]),
    ("brown", [0x80, 0x80, 0x00]),
    ("light gray", [0xc0, 0xc0, 0xc0]),
    ("dark gray", [0x80, 0x80, 0x80]),
    ("blue", [0x00, 0x00, 0xff]),
    ("green", [0x00, 0xff, 0x00]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("red", [0xff, 0x00, 0x00]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
];
