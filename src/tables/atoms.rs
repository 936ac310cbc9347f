/// Value carried by an atom
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AtomValue {
    Exact(i64),
    /// Irrational or otherwise non-integer value, never used for exact matching
    Approx(f64),
}

/// A fixed LaTeX sub-expression and its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub text: &'static str,
    pub value: AtomValue,
}

impl Atom {
    const fn exact(text: &'static str, value: i64) -> Self {
        Self {
            text,
            value: AtomValue::Exact(value),
        }
    }

    const fn approx(text: &'static str, value: f64) -> Self {
        Self {
            text,
            value: AtomValue::Approx(value),
        }
    }

    /// The integer value, if this atom takes part in exact matching
    pub fn exact_value(&self) -> Option<i64> {
        match self.value {
            AtomValue::Exact(v) => Some(v),
            AtomValue::Approx(_) => None,
        }
    }
}

/// The fixed zero-valued atom used for a target of zero
pub const ZERO_ATOM: &str = r"\sin(4\pi)";

pub const ATOMS: &[Atom] = &[
    Atom::exact(ZERO_ATOM, 0),
    Atom::exact(r"\int_{0}^{4\pi}\sin t\,dt", 0),
    Atom::exact(r"\ln\left(\log_{4}4\right)", 0),
    Atom::exact(r"\log_{4}4", 1),
    Atom::exact(r"\dfrac{4}{4}", 1),
    Atom::exact(r"\dfrac{\Gamma(4)}{\Gamma(4)}", 1),
    Atom::exact(r"\int_{0}^{4} \delta(t-\log_{4}4)\,dt", 1),
    Atom::exact(r"\tan\left(\dfrac{\pi}{4}\right)", 1),
    Atom::exact(r"\Gamma(\sqrt{4})", 1),
    Atom::exact(r"\cos(4\pi)", 1),
    Atom::exact(r"\sqrt{4}", 2),
    Atom::exact(r"\lfloor \sqrt{4} \rfloor", 2),
    Atom::exact(r"\dfrac{4 + 4}{4}", 2),
    Atom::exact(r"\dfrac{\Gamma(4)}{\sqrt{4}}", 3),
    Atom::exact(r"\big\lfloor \sqrt{4} + \ln 4 \big\rfloor", 3),
    Atom::exact("4", 4),
    Atom::exact(r"\int_{0}^{4} \dfrac{4}{4}\,dt", 4),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} \dfrac{4}{4}", 4),
    Atom::exact(r"\big\lfloor 4 + \ln 4 \big\rfloor", 5),
    Atom::exact(r"\lceil 4 + \log_{4}\sqrt{4} \rceil", 5),
    Atom::exact(r"\Gamma(4)", 6),
    Atom::exact(r"\dfrac{4!}{4}", 6),
    Atom::exact(r"\big\lfloor 4 + \pi \big\rfloor", 7),
    Atom::exact("4 + 4", 8),
    Atom::exact(r"\int_{0}^{4} t\,dt", 8),
    Atom::exact(r"\left(\dfrac{\Gamma(4)}{\sqrt{4}}\right)^{\sqrt{4}}", 9),
    Atom::exact(r"\dfrac{4}{0.4}", 10),
    Atom::exact(r"\int_{0}^{4} \lfloor t + \dfrac{4}{4} \rfloor\,dt", 10),
    Atom::exact(r"\dfrac{44}{4}", 11),
    Atom::exact(r"\dfrac{4!}{\sqrt{4}}", 12),
    Atom::exact(r"\big\lfloor 4\pi \big\rfloor", 12),
    Atom::exact(r"\big\lceil 4\pi \big\rceil", 13),
    Atom::exact(r"\int_{0}^{4} \lfloor t \rfloor^{\sqrt{4}}\,dt", 14),
    Atom::exact(r"\sum_{k=0}^{\dfrac{4}{4} + \sqrt{4}} k^{\sqrt{4}}", 14),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} \dfrac{k^{\sqrt{4}}}{\sqrt{4}}", 15),
    Atom::exact(r"4^{\sqrt{4}}", 16),
    Atom::exact(r"\int_{0}^{4} \sqrt{4}\,t\,dt", 16),
    Atom::exact(r"4!", 24),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} k^{\sqrt{4}}", 30),
    Atom::exact(r"\int_{0}^{4} \lfloor t \rfloor^{\dfrac{4}{4} + \sqrt{4}}\,dt", 36),
    Atom::exact(
        r"\sum_{k=0}^{\dfrac{4}{4} + \sqrt{4}} k^{\dfrac{4}{4} + \sqrt{4}}",
        36,
    ),
    Atom::exact(r"\dfrac{4 \cdot 4}{0.4}", 40),
    Atom::exact("44", 44),
    Atom::exact(r"\int_{0}^{4} \lfloor t \rfloor^{4}\,dt", 98),
    Atom::exact(r"\sum_{k=0}^{\dfrac{4}{4} + \sqrt{4}} k^{4}", 98),
    Atom::exact(r"\dfrac{4}{0.04}", 100),
    Atom::exact(r"\left(4 + \dfrac{4}{4}\right)!", 120),
    Atom::exact(r"\Gamma\left(4 + \sqrt{4}\right)", 120),
    Atom::exact(r"4^{4}", 256),
    Atom::exact(r"\sum_{k=0}^{4} 4^{k}", 341),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} k^{4}", 354),
    Atom::exact("444", 444),
    Atom::exact(r"\left(4 + \sqrt{4}\right)!", 720),
    Atom::exact(r"\dfrac{4}{0.004}", 1_000),
    Atom::exact(r"4^{\dfrac{4}{4} + 4}", 1_024),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} k^{\dfrac{4}{4} + 4}", 1_300),
    Atom::exact(r"4^{4 + \sqrt{4}}", 4_096),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} k^{4 + \sqrt{4}}", 4_890),
    Atom::exact(r"\left(4 + 4 - \dfrac{4}{4}\right)!", 5_040),
    Atom::exact(r"\dfrac{4}{0.0004}", 10_000),
    Atom::exact(r"4^{\dfrac{4}{4} + 4 + \sqrt{4}}", 16_384),
    Atom::exact(
        r"\sum_{k=\dfrac{4}{4}}^{4} k^{\dfrac{4}{4} + 4 + \sqrt{4}}",
        18_700,
    ),
    Atom::exact(r"\left(4 + 4\right)!", 40_320),
    Atom::exact(r"4^{4 + 4}", 65_536),
    Atom::exact(r"\sum_{k=\dfrac{4}{4}}^{4} k^{4 + 4}", 72_354),
    Atom::exact(r"\dfrac{4}{0.00004}", 100_000),
    Atom::exact(r"4^{\dfrac{4}{4} + 4 + 4}", 262_144),
    Atom::exact(r"\left(4 + 4 + \dfrac{4}{4}\right)!", 362_880),
    Atom::exact(r"\dfrac{4}{0.000004}", 1_000_000),
    Atom::exact(r"4^{4 + 4 + \sqrt{4}}", 1_048_576),
    Atom::exact(r"4^{\dfrac{4}{4} + 4 + 4 + \sqrt{4}}", 4_194_304),
    Atom::exact(r"4^{4 + 4 + 4}", 16_777_216),
    // e^4 - 1
    Atom::approx(r"\int_{0}^{4} e^{t}\,dt", 53.598),
    // ln 5
    Atom::approx(r"\int_{0}^{4} \dfrac{dt}{\dfrac{4}{4} + t}", 1.609),
    // H_4
    Atom::approx(r"\sum_{k=\dfrac{4}{4}}^{4} \dfrac{\dfrac{4}{4}}{k}", 2.083),
    // arctan 4
    Atom::approx(
        r"\int_{0}^{4} \dfrac{\dfrac{4}{4}}{\dfrac{4}{4} + t^{\sqrt{4}}}\,dt",
        1.326,
    ),
    // Si(4)
    Atom::approx(r"\int_{0}^{4} \dfrac{\sin t}{t}\,dt", 1.758),
    Atom::approx(r"\int_{0}^{4} \dfrac{t^{\sqrt{4}}}{\sqrt{4}}\,dt", 10.667),
];
