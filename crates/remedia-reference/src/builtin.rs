//! The built-in disease reference catalog.
//!
//! General-knowledge reference entries, hardcoded so the assistant works
//! with no external data source. None of this is medical advice; it backs
//! the demo surfaces and tests. Entry order matters: the matcher's
//! tie-breaking preserves it.

use remedia_contracts::disease::{DiseaseCategory, DiseaseId, DiseaseRecord};

fn entry(
    id: &str,
    name: &str,
    category: DiseaseCategory,
    description: &str,
    causes: &[&str],
    symptoms: &[&str],
    remedies: &[&str],
    medicines: &[&str],
) -> DiseaseRecord {
    DiseaseRecord {
        id: DiseaseId::new(id),
        name: name.to_string(),
        category,
        description: description.to_string(),
        causes: causes.iter().map(|s| s.to_string()).collect(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        remedies: remedies.iter().map(|s| s.to_string()).collect(),
        medicines: medicines.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build the full built-in catalog, in canonical order.
pub(crate) fn builtin_records() -> Vec<DiseaseRecord> {
    vec![
        entry(
            "common-cold",
            "Common Cold",
            DiseaseCategory::Respiratory,
            "A mild viral infection of the nose and throat that clears on its own \
             within a week or two.",
            &["Rhinovirus exposure", "Close contact with infected people", "Weakened immunity"],
            &["runny nose", "sore throat", "cough", "sneezing", "mild fever", "congestion"],
            &[
                "Rest and stay hydrated",
                "Gargle warm salt water for throat relief",
                "Use a humidifier or inhale steam",
                "Eat light, warm meals",
            ],
            &["Paracetamol", "Cetirizine", "Throat lozenges"],
        ),
        entry(
            "influenza",
            "Influenza",
            DiseaseCategory::Infectious,
            "A contagious viral infection with abrupt onset of fever and body aches, \
             more severe than a cold.",
            &["Influenza virus strains A and B", "Airborne droplets", "Seasonal outbreaks"],
            &["high fever", "dry cough", "body aches", "chills", "fatigue", "headache"],
            &[
                "Stay home and rest until fever subsides",
                "Drink plenty of fluids",
                "Use fever reducers as directed",
            ],
            &["Oseltamivir", "Paracetamol", "Ibuprofen"],
        ),
        entry(
            "dengue-fever",
            "Dengue Fever",
            DiseaseCategory::Infectious,
            "A mosquito-borne viral illness common in tropical regions; severe cases \
             need hospital care.",
            &["Aedes mosquito bite", "Travel to endemic regions", "Standing water nearby"],
            &["high fever", "severe headache", "joint pain", "muscle pain", "skin rash", "pain behind the eyes"],
            &[
                "Seek medical evaluation without delay",
                "Stay hydrated with oral rehydration fluids",
                "Rest until the fever fully resolves",
                "Avoid aspirin and ibuprofen",
            ],
            &["Paracetamol", "Oral rehydration salts"],
        ),
        entry(
            "malaria",
            "Malaria",
            DiseaseCategory::Infectious,
            "A parasitic infection spread by mosquito bites, marked by cyclical fever \
             and chills.",
            &["Plasmodium parasites", "Anopheles mosquito bite", "Travel to endemic regions"],
            &["cyclical fever", "shaking chills", "sweating", "headache", "nausea", "fatigue"],
            &[
                "Seek urgent medical testing and treatment",
                "Complete the full antimalarial course",
                "Rest and maintain fluid intake",
            ],
            &["Artemether-lumefantrine", "Chloroquine", "Paracetamol"],
        ),
        entry(
            "typhoid-fever",
            "Typhoid Fever",
            DiseaseCategory::Infectious,
            "A bacterial infection from contaminated food or water causing sustained \
             fever and abdominal discomfort.",
            &["Salmonella typhi bacteria", "Contaminated food or water", "Poor sanitation"],
            &["sustained fever", "abdominal pain", "weakness", "loss of appetite", "constipation"],
            &[
                "See a doctor for antibiotics promptly",
                "Drink safe, boiled water",
                "Eat soft, easily digested food",
            ],
            &["Ciprofloxacin", "Azithromycin", "Oral rehydration salts"],
        ),
        entry(
            "asthma",
            "Asthma",
            DiseaseCategory::Respiratory,
            "A chronic airway condition where inflammation narrows the breathing \
             passages in episodes.",
            &["Allergen exposure", "Family history", "Air pollution", "Cold air or exercise"],
            &["wheezing", "shortness of breath", "chest tightness", "night cough"],
            &[
                "Keep a reliever inhaler within reach",
                "Identify and avoid personal triggers",
                "Follow the written asthma action plan",
            ],
            &["Salbutamol inhaler", "Budesonide inhaler", "Montelukast"],
        ),
        entry(
            "type-2-diabetes",
            "Type 2 Diabetes",
            DiseaseCategory::Chronic,
            "A chronic metabolic condition where the body resists insulin, raising \
             blood sugar over time.",
            &["Insulin resistance", "Excess body weight", "Sedentary lifestyle", "Family history"],
            &["increased thirst", "frequent urination", "blurred vision", "slow healing wounds", "fatigue"],
            &[
                "Follow a consistent low-sugar meal plan",
                "Walk or exercise for 30 minutes daily",
                "Monitor blood glucose as advised",
            ],
            &["Metformin", "Glimepiride", "Insulin glargine"],
        ),
        entry(
            "hypertension",
            "Hypertension",
            DiseaseCategory::Chronic,
            "Persistently elevated blood pressure that quietly strains the heart and \
             vessels.",
            &["High salt intake", "Chronic stress", "Obesity", "Family history"],
            &["high blood pressure", "morning headache", "dizziness", "blurred vision", "nosebleeds"],
            &[
                "Reduce salt and processed food",
                "Exercise regularly and manage weight",
                "Measure blood pressure at home",
            ],
            &["Amlodipine", "Lisinopril", "Hydrochlorothiazide"],
        ),
        entry(
            "migraine",
            "Migraine",
            DiseaseCategory::Neurological,
            "Recurring attacks of intense, often one-sided head pain with sensory \
             sensitivity.",
            &["Stress", "Sleep disruption", "Certain foods", "Hormonal changes"],
            &["pounding headache", "nausea", "light sensitivity", "sound sensitivity", "visual aura"],
            &[
                "Rest in a dark, quiet room",
                "Apply a cold compress to the forehead",
                "Keep a trigger diary",
            ],
            &["Sumatriptan", "Ibuprofen", "Paracetamol"],
        ),
        entry(
            "gastroenteritis",
            "Gastroenteritis",
            DiseaseCategory::Digestive,
            "Irritation of the stomach and intestines, usually viral, causing short-lived \
             digestive upset.",
            &["Norovirus or rotavirus", "Contaminated food", "Poor hand hygiene"],
            &["diarrhea", "vomiting", "stomach cramps", "mild fever", "nausea"],
            &[
                "Sip oral rehydration solution frequently",
                "Eat bland food until settled",
                "Wash hands thoroughly and often",
            ],
            &["Oral rehydration salts", "Loperamide", "Zinc supplements"],
        ),
        entry(
            "eczema",
            "Eczema",
            DiseaseCategory::Dermatological,
            "A flaring skin condition where the barrier dries out and itches, often \
             from childhood.",
            &["Genetic skin barrier weakness", "Irritants and allergens", "Dry climate"],
            &["itchy skin", "dry patches", "red rash", "skin flaking", "cracked skin"],
            &[
                "Moisturize at least twice daily",
                "Use fragrance-free soap and detergent",
                "Keep fingernails short to limit scratching",
            ],
            &["Hydrocortisone cream", "Cetirizine", "Emollient lotion"],
        ),
        entry(
            "tension-headache",
            "Tension Headache",
            DiseaseCategory::General,
            "The everyday band-like headache brought on by stress, posture, or eye \
             strain.",
            &["Stress", "Poor posture", "Eye strain", "Skipped meals"],
            &["dull headache", "pressure around the forehead", "neck stiffness", "tender scalp"],
            &[
                "Take short breaks from screens",
                "Stretch the neck and shoulders",
                "Keep regular meals and sleep",
            ],
            &["Paracetamol", "Ibuprofen"],
        ),
    ]
}
