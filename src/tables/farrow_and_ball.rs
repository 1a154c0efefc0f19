//! Farrow & Ball paint colours as screen approximations of the paint chips.

pub(crate) static FARROW_AND_BALL_COLOURS: &[(&str, [u8; 3])] = &[
    ("pointing", [0xf1, 0xec, 0xe0]),
    ("wimborne white", [0xf2, 0xed, 0xdc]),
    ("strong white", [0xea, 0xe6, 0xdd]),
    ("elephant's breath", [0xcd, 0xc3, 0xb7]),
    ("skimming stone", [0xd5, 0xcc, 0xc2]),
    ("french gray", [0xc0, 0xc2, 0xb2]),
    ("charleston gray", [0xa0, 0x9b, 0x92]),
    ("setting plaster", [0xe2, 0xc3, 0xb1]),
    ("sulking room pink", [0xad, 0x88, 0x84]),
    ("breakfast room green", [0x7d, 0x91, 0x69]),
    ("card room green", [0x8a, 0x8f, 0x7b]),
    ("green smoke", [0x6f, 0x7a, 0x6b]),
    ("down pipe", [0x5f, 0x65, 0x66]),
    ("stiffkey blue", [0x3f, 0x4d, 0x5b]),
    ("hague blue", [0x31, 0x41, 0x4a]),
    ("railings", [0x3f, 0x45, 0x49]),
    ("pitch black", [0x2a, 0x2a, 0x2a]),
];
