// File: src/core/tables.rs
//! Static linguistic reference data: case descriptions and consonant gradation
//! pairs. Built once per process and never mutated.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Descriptive fields of a noun case, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForm {
    pub formal_name: &'static str,
    pub vernacular_name: &'static str,
    pub question: &'static str,
    pub suffix_pattern: &'static str,
}

impl NounForm {
    const fn new(
        formal_name: &'static str,
        vernacular_name: &'static str,
        question: &'static str,
        suffix_pattern: &'static str,
    ) -> Self {
        Self {
            formal_name,
            vernacular_name,
            question,
            suffix_pattern,
        }
    }

    pub fn fields(&self) -> [&'static str; 4] {
        [
            self.formal_name,
            self.vernacular_name,
            self.question,
            self.suffix_pattern,
        ]
    }

    /// All four fields joined by single spaces. Empty fields still contribute
    /// their separator.
    pub fn describe(&self) -> String {
        self.fields().join(" ")
    }
}

/// Ordered alternation pairs of one gradation class.
pub type GradationPairs = &'static [(&'static str, &'static str)];

const NOUN_FORMS: &[(&str, NounForm)] = &[
    ("nimento", NounForm::new("nominatiivi", "nimentö", "mikä? kuka?", "monikossa -t")),
    ("kohdanto", NounForm::new("akkusatiivi", "kohdanto", "kenet?", "")),
    (
        "omanto",
        NounForm::new(
            "genetiivi",
            "omanto",
            "minkä? kenen?",
            "-n, -en, -in, -den, -ten, -tten",
        ),
    ),
    ("olento", NounForm::new("essiivi", "olento", "minä? millaisena? kenenä?", "-na, -nä")),
    (
        "osanto",
        NounForm::new(
            "partitiivi",
            "osanto, eronto",
            "mitä? ketä?",
            "-a, -ä, -ta, -tä",
        ),
    ),
    (
        "tulento",
        NounForm::new(
            "translatiivi",
            "tulento",
            "miksi? millaiseksi? keneksi?",
            "-ksi -kse (omistusliitteen yhteydessä)",
        ),
    ),
    ("sisaolento", NounForm::new("inessiivi", "sisäolento", "missä? kenessä?", "-ssa, -ssä")),
    ("sisaeronto", NounForm::new("elatiivi", "sisäeronto", "mistä? kenestä?", "-sta, -stä")),
    (
        "sisatulento",
        NounForm::new(
            "illatiivi",
            "sisätulento",
            "mihin? keneen?",
            "-loppuvokaalin pidentymä + n  -han, hen, hin, hon, hun, hyn, hän, hön  -seen, -siin",
        ),
    ),
    ("ulkoolento", NounForm::new("adessiivi", "ulko-olento", "millä? kenellä?", "-lla, -llä")),
    ("ulkoeronto", NounForm::new("ablatiivi", "ulkoeronto", "miltä? keneltä?", "-lta, -ltä")),
    ("ulkotulento", NounForm::new("allatiivi", "ulkotulento", "mille? kenelle?", "-lle")),
    ("vajanto", NounForm::new("abessiivi", "vajanto", "mitä ilman?", "-tta, -ttä")),
    (
        "keinonto",
        NounForm::new(
            "instruktiivi",
            "keinonto",
            "miten (keinoa, välinettä)",
            "-n",
        ),
    ),
    ("seuranto", NounForm::new("komitatiivi", "seuranto", "minkä kanssa", "-in, -ine-")),
];

const GRADATIONS: &[(&str, GradationPairs)] = &[
    ("A", &[("k", "kk"), ("kk", "k")]),
    ("B", &[("p", "pp"), ("pp", "p")]),
    ("C", &[("t", "tt"), ("tt", "t")]),
    ("D", &[("k", "-"), ("-", "k")]),
    ("E", &[("p", "v"), ("v", "p")]),
    ("F", &[("t", "d"), ("d", "t")]),
    ("G", &[("nk", "ng"), ("ng", "nk")]),
    ("H", &[("mp", "mm"), ("mm", "mp")]),
    ("I", &[("lt", "ll"), ("ll", "lt")]),
    ("J", &[("nt", "nn"), ("nn", "nt")]),
    ("K", &[("rt", "rr"), ("rr", "rt")]),
    ("L", &[("l", "k"), ("k", "l")]),
    ("M", &[("k", "v")]),
    ("_", &[("_", "_")]),
];

static NOUN_FORM_TABLE: Lazy<HashMap<&'static str, NounForm>> =
    Lazy::new(|| NOUN_FORMS.iter().copied().collect());

static GRADATION_TABLE: Lazy<HashMap<&'static str, GradationPairs>> =
    Lazy::new(|| GRADATIONS.iter().copied().collect());

/// Looks up the description of a case code such as `"sisatulento"`.
pub fn noun_form(case: &str) -> Option<&'static NounForm> {
    NOUN_FORM_TABLE.get(case)
}

/// Looks up the alternation pairs of a gradation class such as `"D"`.
pub fn gradation_pairs(class: &str) -> Option<GradationPairs> {
    GRADATION_TABLE.get(class).copied()
}
