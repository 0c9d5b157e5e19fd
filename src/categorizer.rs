use crate::models::Category;
use regex::Regex;
use std::sync::OnceLock;

/// Keyword groups in evaluation order, one `(pattern, category)` pair per
/// group. The order is the tie-break contract: a subject matching several
/// groups takes the category of the first one listed here (e.g. a subject
/// containing both "tablet" and "injection" is Pharma, not Injection &
/// Infusion). Reordering these rules changes classification behavior.
///
/// All patterns are matched case-insensitively as substrings unless a
/// word-boundary anchor is written explicitly.
const RULES: &[(&str, Category)] = &[
    (
        "bags|bottle|containers|consumables|dressing|disposable|gloves|mask|patches|paper|scrub|sharp box|sponges|swabstick|syringes|tape|tap|wax|wipes|wristbands",
        Category::Consumable,
    ),
    (
        "bisacodyl|bromide|capsule|cetirizine|cream|drops|enema|eye|flexpens|gel|granules|inhaler|insulin|levetiracetam|levocarnitine|linctus|lozenge|mixture|ointment|oral|pencil|peritoneal|potassium|powder|prefilled|risdiplam|sirolimus|sodium|spray|suspension|syrup|tablet",
        Category::Pharma,
    ),
    ("injection|infusion", Category::InjectionInfusion),
    ("implant", Category::Implants),
    (
        "computed tomography-based|endoscope|endoscopic|endoscopy|microscopes|radiographic|radiography|scanning|spectrometers|stereotactic",
        Category::Imaging,
    ),
    (
        r"analyzers|bicart select combi-pak|cytometers|heart-lung support|hemodialysis|immunostainers|indicator|processors|\bradiotherapy systems\b|\bunits?\b",
        Category::Device,
    ),
    ("laboratory|point-of-care|test|assay", Category::Testing),
    ("vaccine", Category::Vaccine),
];

/// Compiled rule list, built once on first use.
static COMPILED_RULES: OnceLock<Vec<(Regex, Category)>> = OnceLock::new();

fn compiled_rules() -> &'static [(Regex, Category)] {
    COMPILED_RULES.get_or_init(|| {
        RULES
            .iter()
            .map(|(pattern, category)| {
                let regex = Regex::new(&format!("(?i){pattern}"))
                    .expect("RULES patterns are valid regexes");
                (regex, *category)
            })
            .collect()
    })
}

/// Assigns a procurement category to a tender subject.
///
/// Pure function of the subject text and the fixed rule list: the rules are
/// tested in order and the first match wins; a subject matching none of the
/// keyword groups is `Others`.
pub fn categorize(subject: &str) -> Category {
    for (regex, category) in compiled_rules() {
        if regex.is_match(subject) {
            return *category;
        }
    }
    Category::Others
}
