extern crate colourmatch;
extern crate serde_json;

use colourmatch::prelude::*;

#[test]
fn describe_single_and_shared_names() {
    let cases = [
        ((0x00, 0x00, 0xee), "blue2"),
        ((0x03, 0x03, 0x03), "gray1"),
        ((0x00, 0x00, 0x00), "black"),
        ((0x00, 0x64, 0x00), "darkgreen"),
    ];
    for &(rgb, expected) in cases.iter() {
        assert_eq!(describe(RGBAColour::from(rgb)), expected);
    }
}

#[test]
fn describe_names_that_differ_between_families() {
    assert_eq!(
        describe(RGBAColour::opaque(0xc0, 0xc0, 0xc0)),
        "silver (Web and HTML) or light gray (CGA)"
    );
    assert_eq!(
        describe(RGBAColour::opaque(0x00, 0xff, 0x00)),
        "lime (Web and HTML) or green (CGA and X11)"
    );
}

#[test]
fn describe_unnamed_colour() {
    let c = RGBAColour::opaque(0x01, 0x02, 0x03);
    let text = describe(c);
    assert_eq!(text, "RGBA{R:0x01, G:0x02, B:0x03, A:0xff}");
    assert_eq!(text, c.to_string());
}

#[test]
fn describe_ignores_alpha() {
    assert_eq!(describe(RGBAColour::new(0, 0, 0xee, 0x10)), "blue2");
}

#[test]
fn describe_with_opt_in_families() {
    let reg = Registry::builtin();
    let white = RGBAColour::opaque(0xff, 0xff, 0xff);
    let text = reg
        .describe_in(white, &[Family::Web, Family::Crayola])
        .unwrap();
    assert_eq!(text, "white");
}

#[test]
fn nearest_names_for_an_unnamed_colour() {
    let c = RGBAColour::opaque(0x01, 0x02, 0x03);
    assert!(closest_within(c, 0.0).unwrap().is_empty());

    let near = closest_within(c, 4.0).unwrap();
    let names: Vec<&str> = near.iter().map(|cand| cand.names[0].as_str()).collect();
    // black is sqrt(14) away in four families, gray1 is sqrt(5) away in X11
    assert_eq!(names, vec!["gray1", "black", "black", "black", "black"]);
    let families: Vec<Family> = near.iter().map(|cand| cand.family).collect();
    assert_eq!(
        families,
        vec![Family::X11, Family::Web, Family::Cga, Family::Html, Family::X11]
    );
}

#[test]
fn family_order_is_the_callers() {
    let reg = Registry::builtin();
    let black = RGBAColour::opaque(0, 0, 0);
    let found = reg
        .closest_within(black, &[Family::X11, Family::Web], 0.0)
        .unwrap();
    assert_eq!(found[0].family, Family::X11);
    assert_eq!(found[0].names, vec!["black", "gray0", "grey0"]);
    assert_eq!(found[1].family, Family::Web);
}

#[test]
fn bad_arguments_are_errors() {
    let reg = Registry::builtin();
    let c = RGBAColour::opaque(1, 2, 3);
    assert!(reg
        .closest_within(c, &[Family::Web, Family::Web], 1.0)
        .unwrap_err()
        .is_bad_family());
    assert_eq!(
        closest_within(c, -1.0),
        Err(ColourError::BadColourProximity(-1.0))
    );
    assert_eq!(closest_n(c, -1), Err(ColourError::BadColourCount(-1)));
    assert_eq!(closest_n(c, 0), Ok(vec![]));
    assert!(Family::from_literal("NoSuchColours").unwrap_err().is_bad_family());
    assert_eq!(
        Family::cga_colour(99).unwrap_err().to_string(),
        "bad CGA colour index: 99"
    );
}

#[test]
fn round_trip_through_hsl() {
    let c = RGBAColour::opaque(0x12, 0x9a, 0xfe);
    let (hsl, hsv) = to_hsl_and_hsv(c);
    assert!(compare(hsl.to_rgba(), c, 1).is_ok());
    assert!(compare(hsv.to_rgba(), c, 1).is_ok());
}

#[test]
fn generated_colours() {
    let lower = RGBAColour::opaque(0xff, 0, 0);
    let upper = RGBAColour::opaque(0, 0, 0xff);
    assert_eq!(make_colours_between(2, lower, upper), Ok(vec![lower, upper]));
    assert_eq!(
        make_colours_between(1, lower, upper),
        Ok(vec![RGBAColour::opaque(0x7f, 0, 0x7f)])
    );
    let steps = make_colours_between(7, lower, upper).unwrap();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0], lower);
    assert_eq!(steps[6], upper);

    let random = make_colours(5).unwrap();
    assert!(!random.is_empty() && random.len() <= 5);
    assert_ne!(contrast(lower), lower);
}

#[test]
fn serialises_as_json() {
    let found = closest_n(RGBAColour::opaque(0, 0, 0xee), 1).unwrap();
    let json = serde_json::to_string(&found[0]).unwrap();
    assert_eq!(
        json,
        r#"{"distance":0,"family":"X11","colour":{"r":0,"g":0,"b":238,"a":255},"names":["blue2"]}"#
    );
    let back: Candidate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, found[0]);

    let family: Family = serde_json::from_str("\"Pantone\"").unwrap();
    assert_eq!(family, Family::Pantone);
}
