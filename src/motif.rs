//! The `Motif` / `Candidate` record types and the fixed
//! subclass taxonomy used to derive motif ids.

use std::fmt;

use crate::interval::Span;

/// The discriminant of a [`Motif`]: which structural class it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MotifClass {
    CurvedDna,
    SlippedDna,
    Cruciform,
    RLoop,
    Triplex,
    GQuadruplex,
    IMotif,
    ZDna,
    APhilicDna,
    Hybrid,
    NonBDnaClusters,
}

impl MotifClass {
    /// The fixed class ordinal used as the first component of a subclass
    /// ordinal (e.g. `6` in `6.2`).
    fn ordinal(self) -> u8 {
        match self {
            MotifClass::CurvedDna => 1,
            MotifClass::SlippedDna => 2,
            MotifClass::Cruciform => 3,
            MotifClass::RLoop => 4,
            MotifClass::Triplex => 5,
            MotifClass::GQuadruplex => 6,
            MotifClass::IMotif => 7,
            MotifClass::ZDna => 8,
            MotifClass::APhilicDna => 9,
            MotifClass::Hybrid => 10,
            MotifClass::NonBDnaClusters => 11,
        }
    }

    /// The closed, ordered list of subclass labels for this class. Index
    /// (1-based) in this list is the second component of the subclass
    /// ordinal. `Hybrid` and `Non-B_DNA_Clusters` subclasses are generated
    /// strings, not members of a closed list, so they fall back to `.0`.
    fn subclass_taxonomy(self) -> &'static [&'static str] {
        match self {
            MotifClass::CurvedDna => &["Global curvature", "Local Curvature"],
            MotifClass::SlippedDna => &[
                "Homopolymer STR",
                "Dinucleotide STR",
                "Trinucleotide STR",
                "4-mer STR",
                "5-mer STR",
                "6-mer STR",
                "7-mer STR",
                "8-mer STR",
                "9-mer STR",
                "Direct Repeat",
            ],
            MotifClass::Cruciform => &["Cruciform"],
            MotifClass::RLoop => &[
                "RLFS model 1",
                "RLFS model 2",
                "RLFS model 3",
                "RLFS model 4",
                "RLFS model 5",
            ],
            MotifClass::Triplex => &[
                "Homopurine tract",
                "Homopyrimidine tract",
                "Mirror repeat (purine)",
                "Mirror repeat (pyrimidine)",
            ],
            MotifClass::GQuadruplex => &[
                "Canonical G4",
                "Relaxed G4",
                "Long-loop G4",
                "Bulged G4",
                "Multimeric G4",
                "Imperfect G4",
                "G-Triplex",
            ],
            MotifClass::IMotif => &[
                "Canonical i-Motif",
                "AC-motif type 1",
                "AC-motif type 2",
                "AC-motif type 3",
                "AC-motif type 4",
                "AC-motif type 5",
                "AC-motif type 6",
            ],
            MotifClass::ZDna => &["Z-DNA", "eGZ"],
            MotifClass::APhilicDna => &["A-philic_DNA"],
            MotifClass::Hybrid | MotifClass::NonBDnaClusters => &[],
        }
    }

    /// The `<ClassOrdinal>.<SubclassOrdinal>` label used in motif ids.
    pub fn subclass_ordinal(self, subclass: &str) -> String {
        let class_ordinal = self.ordinal();
        match self.subclass_taxonomy().iter().position(|s| *s == subclass) {
            Some(index) => format!("{class_ordinal}.{}", index + 1),
            None => format!("{class_ordinal}.0"),
        }
    }
}

impl fmt::Display for MotifClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotifClass::CurvedDna => "Curved_DNA",
            MotifClass::SlippedDna => "Slipped_DNA",
            MotifClass::Cruciform => "Cruciform",
            MotifClass::RLoop => "R-Loop",
            MotifClass::Triplex => "Triplex",
            MotifClass::GQuadruplex => "G-Quadruplex",
            MotifClass::IMotif => "i-Motif",
            MotifClass::ZDna => "Z-DNA",
            MotifClass::APhilicDna => "A-philic_DNA",
            MotifClass::Hybrid => "Hybrid",
            MotifClass::NonBDnaClusters => "Non-B_DNA_Clusters",
        };
        f.write_str(name)
    }
}

/// A scored detection before cross-class resolution and id assignment.
///
/// Detectors produce `Candidate`s; the orchestrator turns the
/// post-resolution survivors into [`Motif`]s by attaching an id. No motif
/// is ever mutated after leaving its detector.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub class: MotifClass,
    pub subclass: String,
    pub span: Span,
    pub score: f64,
    pub method: &'static str,
}

impl Candidate {
    pub fn new(
        class: MotifClass,
        subclass: impl Into<String>,
        span: Span,
        score: f64,
        method: &'static str,
    ) -> Self {
        Self {
            class,
            subclass: subclass.into(),
            span,
            score,
            method,
        }
    }

    pub fn length(&self) -> usize {
        self.span.len()
    }
}

/// A finalized, immutable motif occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub class: MotifClass,
    pub subclass: String,
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub score: f64,
    pub method: &'static str,
    pub sequence: String,
    pub strand: char,
    pub id: String,
}

impl Motif {
    /// Build a `Motif` from a resolved candidate, attaching its final id.
    ///
    /// `start`/`end` on the returned motif are half-open `[start, end)`
    /// offsets into the scanned sequence; `id` uses 1-based inclusive
    /// coordinates.
    pub fn from_candidate(candidate: Candidate, sequence: &str) -> Self {
        let Candidate {
            class,
            subclass,
            span,
            score,
            method,
        } = candidate;

        let id = format_motif_id(class, &subclass, span);

        Motif {
            class,
            sequence: sequence[span.start..span.end].to_string(),
            subclass,
            start: span.start,
            end: span.end,
            length: span.len(),
            score,
            method,
            strand: '+',
            id,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// `"<Class>_<SubclassOrdinal>_<Start1>-<End1>"`.
pub fn format_motif_id(class: MotifClass, subclass: &str, span: Span) -> String {
    let ordinal = class.subclass_ordinal(subclass);
    format!("{class}_{ordinal}_{}-{}", span.start + 1, span.end)
}
