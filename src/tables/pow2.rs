/// Largest power of two with templates
pub const POW2_CEILING: i64 = 1_024;

/// Stylistic variants for each power of two, in preference order
pub const POW2_TEMPLATES: &[(i64, &[&str])] = &[
    (1, &[r"\log_{4}4", r"\dfrac{\Gamma(4)}{\Gamma(4)}"]),
    (2, &[r"\sqrt{4}", r"\lfloor \sqrt{4} \rfloor"]),
    (4, &["4", r"\left(\sqrt{4}\right)^{\sqrt{4}}"]),
    // no single-term variant on purpose
    (8, &["4 + 4", r"\Gamma(4) + \sqrt{4}"]),
    (16, &[r"4^{\sqrt{4}}", r"\left(\sqrt{4}\right)^{4}"]),
    (32, &[r"4! + (4 + 4)", r"\sqrt{4}^{4 + \log_{4}4}"]),
    (
        64,
        &[r"4^{\left(\sqrt{4} + \log_{4}4\right)}", r"(4 + 4)^{\sqrt{4}}"],
    ),
    (
        128,
        &[
            r"4^{\left(\sqrt{4} + \log_{4}4\right)} \cdot \sqrt{4}",
            r"\sqrt{4}^{4 + \sqrt{4} + \log_{4}4}",
        ],
    ),
    (256, &[r"4^{4}", r"\left(4^{\sqrt{4}}\right)^{\sqrt{4}}"]),
    (
        512,
        &[
            r"4^{4} \cdot \sqrt{4}",
            r"\left(4^{\sqrt{4}}\right)^{\sqrt{4}} \cdot \sqrt{4}",
        ],
    ),
    (
        1_024,
        &[r"4^{\left(4 + \log_{4}4\right)}", r"\left(4^{4}\right) \cdot 4"],
    ),
];
