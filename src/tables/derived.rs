/// Products of indexed texts whose values are computed at build time.
///
/// Digit multiples of the powers of ten give the greedy completion a decimal
/// ladder to climb down.
pub const DERIVED: &[&str] = &[
    r"\sqrt{4} \cdot \dfrac{4}{0.4}",
    r"\dfrac{\Gamma(4)}{\sqrt{4}} \cdot \dfrac{4}{0.4}",
    r"4 \cdot \dfrac{4}{0.4}",
    r"\big\lfloor 4 + \ln 4 \big\rfloor \cdot \dfrac{4}{0.4}",
    r"\Gamma(4) \cdot \dfrac{4}{0.4}",
    r"\big\lfloor 4 + \pi \big\rfloor \cdot \dfrac{4}{0.4}",
    r"(4 + 4) \cdot \dfrac{4}{0.4}",
    r"\left(\dfrac{\Gamma(4)}{\sqrt{4}}\right)^{\sqrt{4}} \cdot \dfrac{4}{0.4}",
    r"\sqrt{4} \cdot \dfrac{4}{0.04}",
    r"\dfrac{\Gamma(4)}{\sqrt{4}} \cdot \dfrac{4}{0.04}",
    r"4 \cdot \dfrac{4}{0.04}",
    r"\big\lfloor 4 + \ln 4 \big\rfloor \cdot \dfrac{4}{0.04}",
    r"\Gamma(4) \cdot \dfrac{4}{0.04}",
    r"\big\lfloor 4 + \pi \big\rfloor \cdot \dfrac{4}{0.04}",
    r"(4 + 4) \cdot \dfrac{4}{0.04}",
    r"\left(\dfrac{\Gamma(4)}{\sqrt{4}}\right)^{\sqrt{4}} \cdot \dfrac{4}{0.04}",
    r"\sqrt{4} \cdot \dfrac{4}{0.004}",
    r"\dfrac{\Gamma(4)}{\sqrt{4}} \cdot \dfrac{4}{0.004}",
    r"4 \cdot \dfrac{4}{0.004}",
    r"\big\lfloor 4 + \ln 4 \big\rfloor \cdot \dfrac{4}{0.004}",
    r"\Gamma(4) \cdot \dfrac{4}{0.004}",
    r"\big\lfloor 4 + \pi \big\rfloor \cdot \dfrac{4}{0.004}",
    r"(4 + 4) \cdot \dfrac{4}{0.004}",
    r"\left(\dfrac{\Gamma(4)}{\sqrt{4}}\right)^{\sqrt{4}} \cdot \dfrac{4}{0.004}",
    r"\sqrt{4} \cdot \dfrac{4}{0.0004}",
    r"\dfrac{\Gamma(4)}{\sqrt{4}} \cdot \dfrac{4}{0.0004}",
    r"4 \cdot \dfrac{4}{0.0004}",
    r"\big\lfloor 4 + \ln 4 \big\rfloor \cdot \dfrac{4}{0.0004}",
    r"\Gamma(4) \cdot \dfrac{4}{0.0004}",
    r"\big\lfloor 4 + \pi \big\rfloor \cdot \dfrac{4}{0.0004}",
    r"(4 + 4) \cdot \dfrac{4}{0.0004}",
    r"\left(\dfrac{\Gamma(4)}{\sqrt{4}}\right)^{\sqrt{4}} \cdot \dfrac{4}{0.0004}",
    r"\sqrt{4} \cdot \dfrac{4}{0.00004}",
    r"\dfrac{\Gamma(4)}{\sqrt{4}} \cdot \dfrac{4}{0.00004}",
    r"4 \cdot \dfrac{4}{0.00004}",
    r"\big\lfloor 4 + \ln 4 \big\rfloor \cdot \dfrac{4}{0.00004}",
    r"\Gamma(4) \cdot \dfrac{4}{0.00004}",
    r"\big\lfloor 4 + \pi \big\rfloor \cdot \dfrac{4}{0.00004}",
    r"(4 + 4) \cdot \dfrac{4}{0.00004}",
    r"\left(\dfrac{\Gamma(4)}{\sqrt{4}}\right)^{\sqrt{4}} \cdot \dfrac{4}{0.00004}",
    r"4! \cdot \sqrt{4}",
    r"4! \cdot 4!",
    r"\dfrac{4}{0.04} \cdot 44",
    r"\dfrac{4}{0.004} \cdot 44",
    r"\dfrac{4}{0.0004} \cdot 44",
    r"\dfrac{4}{0.00004} \cdot 44",
    r"4^{4} \cdot \Gamma(4)",
    r"\left(4 + 4\right)! \cdot 4",
];
