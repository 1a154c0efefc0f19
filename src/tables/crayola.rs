//! A selection of Crayola crayon colours, with the hex values Crayola publishes.

pub(crate) static CRAYOLA_COLOURS: &[(&str, [u8; 3])] = &[
    ("red", [0xed, 0x0a, 0x3f]),
    ("maroon", [0xc3, 0x21, 0x48]),
    ("scarlet", [0xfd, 0x0e, 0x35]),
    ("brick red", [0xc6, 0x2d, 0x42]),
    ("orange red", [0xff, 0x53, 0x49]),
    ("bittersweet", [0xfe, 0x6f, 0x5e]),
    ("orange", [0xff, 0x7f, 0x49]),
    ("yellow", [0xfb, 0xe8, 0x70]),
    ("green", [0x3a, 0xa6, 0x55]),
    ("blue", [0x00, 0x66, 0xff]),
    ("violet", [0x83, 0x59, 0xa3]),
    ("purple", [0x83, 0x59, 0xa3]),
    ("brown", [0xaf, 0x59, 0x3e]),
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
];
