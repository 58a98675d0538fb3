//! Reference content for the disease labels the classifier can return.
//!
//! The mapping is static: an unknown label yields `None` and the info
//! panel stays hidden.

const ALTERNARIA: &str = "\
Alternaria rot is a fungal disease of pomegranate fruit, most commonly \
caused by Alternaria alternata, and a major source of post-harvest losses.

Symptoms: dark brown to black circular or irregular spots on the rind \
that expand quickly under humid conditions, becoming sunken with a \
velvety surface as the fungus grows. Infection usually enters through \
wounds, cracks, or natural openings; fruit with thin or damaged rinds \
is most at risk, especially during storage and transport.

Conditions: humidity above 85% and temperatures of 20-30 \u{b0}C favor the \
fungus, which spreads fast in poorly ventilated storage.

Impact: internal decay with discolored, softened arils and off-flavor; \
severe infections turn the whole fruit into a soft rot.

Management: harvest at optimal maturity to limit skin damage, store cool \
(5-8 \u{b0}C) and dry, keep packing areas sanitized, apply approved \
post-harvest fungicides, avoid mechanical injury, and sort out damaged \
fruit before storage.";

const ANTHRACNOSE: &str = "\
Anthracnose is a fungal disease of pomegranate fruit caused primarily by \
Colletotrichum gloeosporioides, damaging both developing and mature fruit.

Symptoms: small, circular, sunken spots that darken from light brown to \
black, often with concentric rings. Lesions may crack and admit secondary \
infections. The fungus can stay dormant on the fruit until conditions \
turn favorable.

Conditions: warm, humid weather (24-32 \u{b0}C, high relative humidity); rain \
and overhead irrigation splash spores onto fruit. The fungus overwinters \
in infected debris and fallen fruit.

Impact: internal rot with discolored, bitter arils, premature fruit \
drop, and heavy post-harvest losses.

Management: remove infected fruit and debris, apply preventive \
fungicides during fruit development, prune for airflow, prefer drip over \
overhead irrigation, handle fruit gently at harvest, and store cool and \
dry. Some cultivars carry useful resistance.";

const BACTERIAL_BLIGHT: &str = "\
Bacterial blight, caused by Xanthomonas axonopodis pv. punicae, is one \
of the most destructive pomegranate diseases.

Symptoms: water-soaked, dark brown to black angular spots with a greasy, \
oily sheen that enlarge and sink as the disease progresses. Bacteria \
enter through stomata, lenticels, or wounds and multiply rapidly in rind \
and aril tissue.

Conditions: warm temperatures (25-35 \u{b0}C) with high humidity and frequent \
rain; spread is fastest in the monsoon season. Transmission is by water \
splash, wind-driven rain, contaminated tools, and infected planting \
material, and the pathogen persists in debris and soil.

Impact: browned, softened arils with an unpleasant taste, fruit \
cracking, premature drop, and yield losses of 30-80% in severe cases.

Management: certified disease-free planting material, strict orchard \
sanitation, copper-based bactericides as preventives, no overhead \
irrigation, immediate removal of infected fruit, and wide spacing for \
air circulation.";

const CERCOSPORA: &str = "\
Cercospora fruit spot, caused by Cercospora punicae, blemishes \
pomegranate fruit and reduces its market value.

Symptoms: small circular to irregular brown or black spots that enlarge \
and may merge; older spots lighten at the center into a frog-eye \
pattern. Infection often starts near the calyx or at natural openings, \
and sun-exposed or thin-rinded fruit is hit hardest.

Conditions: 22-28 \u{b0}C with relative humidity above 70%; extended leaf \
wetness from dew, rain, or irrigation drives spread. Spores overwinter \
in debris and disperse by wind, water splash, and insects.

Impact: surface blemishes in mild cases; severe infection cracks the \
rind, admits secondary pathogens, and can discolor the arils.

Management: regular removal of infected fruit and debris, preventive \
fungicides during fruit development, pruning and spacing for airflow, \
no overhead irrigation, shade nets against direct sun, and careful \
sorting at harvest.";

const HEALTHY: &str = "\
A healthy pomegranate shows a smooth, unblemished rind of uniform \
yellow-red to deep red color, feels firm with no soft spots or cracks, \
and carries an intact calyx free of decay.

The fruit should feel heavy for its size, a sign of well-developed, \
juicy arils. Cut open, the arils are plump and vibrant, tightly packed, \
with intact membranes and no browning. Healthy fruit is rich in \
antioxidants, vitamins C and K, and compounds such as punicalagins.

Harvest indicators: deep color, a metallic sound when tapped, slight \
flattening of the sides, and a clean break at the stem.

Keeping fruit healthy: integrated pest and disease management, balanced \
fertilization, irrigation without waterlogging, good orchard hygiene, \
and early monitoring for stress. Stored at 5-10 \u{b0}C and 85-90% humidity, \
sound fruit keeps for two to three months.";

/// Look up reference content for a classifier label.
pub fn lookup(label: &str) -> Option<&'static str> {
    match label {
        "Alternaria" => Some(ALTERNARIA),
        "Anthracnose" => Some(ANTHRACNOSE),
        "Bacterial_Blight" => Some(BACTERIAL_BLIGHT),
        "Cercospora" => Some(CERCOSPORA),
        "Healthy" => Some(HEALTHY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_known_labels_have_content() {
        for label in ["Alternaria", "Anthracnose", "Bacterial_Blight", "Cercospora", "Healthy"] {
            let info = lookup(label);
            assert!(info.is_some(), "missing content for {label}");
            assert!(!info.unwrap().is_empty());
        }
    }

    #[test]
    fn unknown_label_yields_none() {
        assert!(lookup("Unknown").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("healthy").is_none()); // labels are case-sensitive
    }
}
