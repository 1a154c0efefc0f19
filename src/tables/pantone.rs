//! Pantone colours of the year, 2000 onwards, with the sRGB values Pantone publishes for them.

pub(crate) static PANTONE_COLOURS: &[(&str, [u8; 3])] = &[
    ("cerulean", [0x9b, 0xb7, 0xd4]),
    ("fuchsia rose", [0xc7, 0x43, 0x75]),
    ("true red", [0xbf, 0x19, 0x32]),
    ("aqua sky", [0x7b, 0xc4, 0xc4]),
    ("tigerlily", [0xe2, 0x58, 0x3e]),
    ("blue turquoise", [0x53, 0xb0, 0xae]),
    ("sand dollar", [0xde, 0xcd, 0xbe]),
    ("chili pepper", [0x9b, 0x1b, 0x30]),
    ("blue iris", [0x5a, 0x5b, 0x9f]),
    ("mimosa", [0xf0, 0xc0, 0x5a]),
    ("turquoise", [0x45, 0xb5, 0xaa]),
    ("honeysuckle", [0xd9, 0x4f, 0x70]),
    ("tangerine tango", [0xdd, 0x41, 0x24]),
    ("emerald", [0x00, 0x94, 0x73]),
    ("radiant orchid", [0xb1, 0x63, 0xa3]),
    ("marsala", [0x95, 0x52, 0x51]),
    ("rose quartz", [0xf7, 0xca, 0xc9]),
    ("serenity", [0x92, 0xa8, 0xd1]),
    ("greenery", [0x88, 0xb0, 0x4b]),
    ("ultra violet", [0x5f, 0x4b, 0x8b]),
    ("living coral", [0xff, 0x6f, 0x61]),
    ("classic blue", [0x0f, 0x4c, 0x81]),
    ("ultimate gray", [0x93, 0x95, 0x97]),
    ("illuminating", [0xf5, 0xdf, 0x4d]),
    ("very peri", [0x66, 0x67, 0xab]),
    ("viva magenta", [0xbb, 0x26, 0x49]),
    ("peach fuzz", [0xff, 0xbe, 0x98]),
    ("mocha mousse", [0xa4, 0x78, 0x64]),
];
