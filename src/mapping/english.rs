//! English tables: Latin homoglyphs and the QWERTY layout

use super::{Locale, Mapping, ENGLISH};

#[rustfmt::skip]
pub(super) const SIMILAR: &[(&str, &[&str])] = &[
    ("a", &["4", "à", "á", "â", "ä"]),
    ("b", &["d", "6", "lb"]),
    ("c", &["e", "ç"]),
    ("d", &["b", "cl"]),
    ("e", &["3", "c", "é", "è"]),
    ("f", &["t"]),
    ("g", &["q", "9"]),
    ("h", &["b", "lh"]),
    ("i", &["1", "l", "í", "ï"]),
    ("j", &["i"]),
    ("k", &["lc"]),
    ("l", &["1", "i"]),
    ("m", &["rn", "nn"]),
    ("n", &["m", "r"]),
    ("o", &["0", "ó", "ö"]),
    ("p", &["q"]),
    ("q", &["g", "p"]),
    ("r", &["n"]),
    ("s", &["5", "z"]),
    ("t", &["7", "f"]),
    ("u", &["v", "ü"]),
    ("v", &["u", "y"]),
    ("w", &["vv"]),
    ("x", &["k"]),
    ("y", &["v"]),
    ("z", &["2", "s"]),
    ("0", &["o"]),
    ("1", &["l", "i"]),
    ("rn", &["m"]),
    ("nn", &["m"]),
    ("vv", &["w"]),
    ("cl", &["d"]),
];

#[rustfmt::skip]
pub(super) const QWERTY: &[(&str, &[&str])] = &[
    ("q", &["w", "a", "s"]),
    ("w", &["q", "e", "a", "s", "d"]),
    ("e", &["w", "r", "s", "d", "f"]),
    ("r", &["e", "t", "d", "f", "g"]),
    ("t", &["r", "y", "f", "g", "h"]),
    ("y", &["t", "u", "g", "h", "j"]),
    ("u", &["y", "i", "h", "j", "k"]),
    ("i", &["u", "o", "j", "k", "l"]),
    ("o", &["i", "p", "k", "l"]),
    ("p", &["o", "l"]),
    ("a", &["q", "w", "s", "z"]),
    ("s", &["a", "d", "w", "e", "z", "x"]),
    ("d", &["s", "f", "e", "r", "x", "c"]),
    ("f", &["d", "g", "r", "t", "c", "v"]),
    ("g", &["f", "h", "t", "y", "v", "b"]),
    ("h", &["g", "j", "y", "u", "b", "n"]),
    ("j", &["h", "k", "u", "i", "n", "m"]),
    ("k", &["j", "l", "i", "o", "m"]),
    ("l", &["k", "o", "p"]),
    ("z", &["a", "s", "x"]),
    ("x", &["z", "c", "s", "d"]),
    ("c", &["x", "v", "d", "f"]),
    ("v", &["c", "b", "f", "g"]),
    ("b", &["v", "n", "g", "h"]),
    ("n", &["b", "m", "h", "j"]),
    ("m", &["n", "j", "k"]),
    ("1", &["2", "q"]),
    ("2", &["1", "3", "q", "w"]),
    ("3", &["2", "4", "w", "e"]),
    ("4", &["3", "5", "e", "r"]),
    ("5", &["4", "6", "r", "t"]),
    ("6", &["5", "7", "t", "y"]),
    ("7", &["6", "8", "y", "u"]),
    ("8", &["7", "9", "u", "i"]),
    ("9", &["8", "0", "i", "o"]),
    ("0", &["9", "o", "p"]),
];

pub(super) fn locale() -> Locale {
    Locale::new(
        ENGLISH,
        Mapping::from_static("english-similar", SIMILAR),
        Mapping::from_static("english-keyboard", QWERTY),
    )
}
