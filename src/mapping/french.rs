//! French tables: accented homoglyphs and the AZERTY layout

use super::{Locale, Mapping, FRENCH};

#[rustfmt::skip]
pub(super) const SIMILAR: &[(&str, &[&str])] = &[
    ("a", &["à", "â", "4"]),
    ("b", &["8", "d"]),
    ("c", &["ç", "e"]),
    ("d", &["cl", "b"]),
    ("e", &["é", "è", "ê", "ë"]),
    ("f", &["ƒ"]),
    ("g", &["q", "9"]),
    ("h", &["b"]),
    ("i", &["î", "ï", "1"]),
    ("j", &["i"]),
    ("k", &["lc"]),
    ("l", &["1", "i"]),
    ("m", &["rn", "nn"]),
    ("n", &["m"]),
    ("o", &["ô", "ö", "0"]),
    ("p", &["q"]),
    ("q", &["g", "p"]),
    ("r", &["n", "ŕ"]),
    ("s", &["5", "z"]),
    ("t", &["7"]),
    ("u", &["ù", "û", "ü", "v"]),
    ("v", &["u"]),
    ("w", &["vv"]),
    ("x", &["k"]),
    ("y", &["ÿ", "v"]),
    ("z", &["2", "s"]),
    ("oe", &["œ"]),
    ("ae", &["æ"]),
    ("rn", &["m"]),
    ("vv", &["w"]),
    ("cl", &["d"]),
];

#[rustfmt::skip]
pub(super) const AZERTY: &[(&str, &[&str])] = &[
    ("a", &["z", "q"]),
    ("z", &["a", "e", "q", "s"]),
    ("e", &["z", "r", "s", "d"]),
    ("r", &["e", "t", "d", "f"]),
    ("t", &["r", "y", "f", "g"]),
    ("y", &["t", "u", "g", "h"]),
    ("u", &["y", "i", "h", "j"]),
    ("i", &["u", "o", "j", "k"]),
    ("o", &["i", "p", "k", "l"]),
    ("p", &["o", "l", "m"]),
    ("q", &["a", "z", "s", "w"]),
    ("s", &["q", "d", "z", "e", "w", "x"]),
    ("d", &["s", "f", "e", "r", "x", "c"]),
    ("f", &["d", "g", "r", "t", "c", "v"]),
    ("g", &["f", "h", "t", "y", "v", "b"]),
    ("h", &["g", "j", "y", "u", "b", "n"]),
    ("j", &["h", "k", "u", "i", "n"]),
    ("k", &["j", "l", "i", "o"]),
    ("l", &["k", "m", "o", "p"]),
    ("m", &["l", "p"]),
    ("w", &["q", "s", "x"]),
    ("x", &["w", "c", "s", "d"]),
    ("c", &["x", "v", "d", "f"]),
    ("v", &["c", "b", "f", "g"]),
    ("b", &["v", "n", "g", "h"]),
    ("n", &["b", "h", "j"]),
];

pub(super) fn locale() -> Locale {
    Locale::new(
        FRENCH,
        Mapping::from_static("french-similar", SIMILAR),
        Mapping::from_static("french-keyboard", AZERTY),
    )
}
