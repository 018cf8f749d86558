//! Fixed knowledge tables and the [`KnowledgeBase`] that owns them.
//!
//! Tables are ordered: emergencies and symptoms are scanned first-match-wins,
//! category keywords in the order listed here.

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::types::{Category, CategoryKeywords, EmergencyEntry, KnowledgeEntry, SymptomEntry};

pub const EMPTY_INPUT_REPLY: &str = "Please ask me a health-related question!";
pub const THANKS_REPLY: &str =
    "You're welcome! I'm glad I could help. Feel free to ask more health questions!";

pub const GREETING_TOKENS: &[&str] = &["hello", "hi", "hey", "hola", "greetings"];
pub const THANKS_TOKENS: &[&str] = &["thank", "thanks", "thank you"];
pub const WELLNESS_TOKENS: &[&str] = &["health", "healthy", "wellness"];

/// Searchable text shared by every greeting document.
pub const GREETING_SEARCH_TEXT: &str = "hello hi hey greeting welcome";

const KNOWLEDGE: &[(Category, &[&str])] = &[
    (Category::GeneralHealth, &[
        "Maintain a balanced diet with fruits, vegetables, and whole grains.",
        "Drink at least 8 glasses of water daily for proper hydration.",
        "Get 7-9 hours of quality sleep every night for optimal health.",
        "Practice good hygiene and wash hands regularly to prevent infections.",
        "Avoid smoking and limit alcohol consumption for better health.",
        "Manage stress through meditation, yoga, or deep breathing exercises.",
        "Get regular health check-ups to monitor your overall health status.",
    ]),
    (Category::DietNutrition, &[
        "Eat 5-6 small meals throughout the day instead of 3 large ones for better metabolism.",
        "Include lean protein in every meal - chicken, fish, eggs, lentils, tofu.",
        "Consume healthy fats like avocado, nuts, seeds, and olive oil in moderation.",
        "Limit processed foods, sugary drinks, and high-sodium foods.",
        "Eat plenty of fiber-rich foods like whole grains, fruits, and vegetables for better digestion.",
        "Include calcium-rich foods like milk, yogurt, and leafy greens for bone health.",
        "Eat a rainbow of fruits and vegetables to get various vitamins and minerals.",
    ]),
    (Category::ExerciseFitness, &[
        "Aim for 150 minutes of moderate exercise or 75 minutes of vigorous exercise per week.",
        "Include both cardio (running, cycling) and strength training (weight lifting) in your routine.",
        "Warm up for 5-10 minutes before exercise and cool down afterwards to prevent injuries.",
        "Stay active throughout the day - take walking breaks if you have a sedentary job.",
        "Include flexibility exercises like yoga or stretching to improve mobility.",
        "Listen to your body and don't overexert yourself - rest when needed.",
        "Find physical activities you enjoy to make exercise a sustainable habit.",
    ]),
    (Category::MentalHealth, &[
        "Practice mindfulness and meditation for at least 10-15 minutes daily.",
        "Take regular breaks and manage stress through hobbies and relaxation techniques.",
        "Maintain social connections with friends and family for emotional support.",
        "Seek professional help if feeling overwhelmed, anxious, or depressed.",
        "Practice gratitude by writing down things you're thankful for each day.",
        "Get sunlight exposure daily to boost vitamin D and improve mood.",
        "Limit screen time and take digital detox breaks for mental clarity.",
    ]),
    (Category::WeightManagement, &[
        "BMI is body mass index which defines your body mass if you want your bmi fill the healthform and check your bmi",
        "BMI between 18.5-24.9 is considered healthy range for most adults.",
        "Lose weight gradually - 1-2 pounds per week is safe and sustainable.",
        "Combine balanced diet with regular exercise for best weight loss results.",
        "Focus on lifestyle changes rather than quick-fix diets for long-term success.",
        "Track your food intake and physical activity to stay accountable.",
        "Get enough sleep as poor sleep can affect hunger hormones and weight.",
        "Stay consistent with healthy habits rather than pursuing perfection.",
    ]),
    (Category::DiseasePrevention, &[
        "Maintain healthy blood pressure through diet, exercise, and stress management.",
        "Control blood sugar levels by limiting refined carbs and sugary foods.",
        "Keep cholesterol in check by reducing saturated and trans fats.",
        "Get vaccinated as recommended and practice good hygiene to prevent infections.",
        "Protect your skin from sun exposure to prevent skin damage and cancer.",
        "Practice safe food handling to prevent foodborne illnesses.",
        "Get regular cancer screenings as recommended for your age and gender.",
    ]),
];

const SYMPTOMS: &[(&str, &str)] = &[
    ("headache", "Rest in a quiet, dark room. Apply cold compress to forehead. Stay hydrated. Consider over-the-counter pain relievers. Consult doctor if headache is severe, persistent, or accompanied by other symptoms."),
    ("fever", "Rest and stay hydrated. Take paracetamol if needed. Use cool compresses. Monitor temperature regularly. See doctor if fever exceeds 103°F, lasts more than 3 days, or is accompanied by rash or difficulty breathing."),
    ("cough", "Drink warm liquids like tea with honey. Use steam inhalation. Avoid irritants like smoke. Consider cough drops. Consult doctor if cough lasts more than 3 weeks, produces blood, or causes breathing difficulties."),
    ("cold", "Get plenty of rest. Drink fluids like water, juice, and clear broth. Use saline nasal drops. Gargle with salt water. Symptoms usually improve in 7-10 days. See doctor if symptoms worsen or don't improve."),
    ("sore throat", "Gargle with warm salt water. Drink warm liquids. Use throat lozenges. Avoid irritants like smoking. Get plenty of rest. See doctor if severe, lasts more than a week, or is accompanied by fever."),
    ("stomach pain", "Eat bland foods like bananas, rice, applesauce, toast. Avoid spicy, fatty, or fried foods. Stay hydrated with small sips of water. Rest. See doctor if pain is severe, persistent, or accompanied by fever/vomiting."),
    ("diarrhea", "Stay hydrated with oral rehydration solutions. Eat bland foods. Avoid dairy, fatty foods, and caffeine. Rest. See doctor if lasts more than 2 days, has blood, or causes dehydration signs."),
    ("constipation", "Increase fiber intake with fruits, vegetables, whole grains. Drink plenty of water. Exercise regularly. Consider fiber supplements if needed. See doctor if persistent or severe."),
    ("back pain", "Apply ice or heat. Take over-the-counter pain relievers. Gentle stretching. Maintain good posture. Avoid heavy lifting. See doctor if severe, persistent, or accompanied by leg weakness/numbness."),
    ("fatigue", "Ensure adequate sleep. Eat balanced meals. Stay hydrated. Exercise regularly. Manage stress. See doctor if persistent, severe, or affecting daily activities."),
];

const EMERGENCIES: &[(&str, &str)] = &[
    ("heart attack", "🚨 EMERGENCY: Chest pain, shortness of breath, or heart attack symptoms require IMMEDIATE medical attention. Call emergency services NOW!"),
    ("chest pain", "🚨 EMERGENCY: Chest pain can be serious. Please seek IMMEDIATE medical attention or call emergency services!"),
    ("difficulty breathing", "🚨 EMERGENCY: Breathing difficulties require IMMEDIATE medical care. Call emergency services NOW!"),
    ("severe bleeding", "🚨 EMERGENCY: For severe bleeding, apply direct pressure and seek IMMEDIATE medical help!"),
    ("suicide", "🚨 EMERGENCY: Please contact emergency services or a crisis helpline immediately. Your life is valuable!"),
    ("stroke", "🚨 EMERGENCY: Sudden numbness, confusion, trouble speaking, or vision problems may indicate stroke. Seek IMMEDIATE medical help!"),
    ("unconscious", "🚨 EMERGENCY: If someone is unconscious, call emergency services immediately!"),
];

const GREETINGS: &[&str] = &[
    "Hello! I'm your health assistant. How can I help you with your health today?",
    "Hi there! Ready to talk about your health and wellness?",
    "Welcome! I'm here to help with your health questions and concerns.",
    "Greetings! I'm your health companion. What would you like to know about your health?",
];

const FALLBACKS: &[&str] = &[
    "I understand you're asking about health. Could you provide more specific details?",
    "That's an important health topic. Let me help you with more specific information about that.",
    "For detailed medical advice on this topic, it's best to consult a healthcare professional.",
    "I can provide general health information. Could you rephrase your question with more details?",
    "I specialize in general health advice. For specific medical conditions, please consult a doctor.",
];

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::DietNutrition, &["diet", "food", "eat", "nutrition", "meal", "protein", "carb", "fat", "vitamin"]),
    (Category::ExerciseFitness, &["exercise", "workout", "fitness", "gym", "run", "walk", "yoga", "cardio", "strength"]),
    (Category::MentalHealth, &["mental", "stress", "anxiety", "depression", "mood", "mind", "meditation", "therapy"]),
    (Category::WeightManagement, &["bmi", "weight", "fat", "obese", "overweight", "underweight", "loss", "gain"]),
    (Category::GeneralHealth, &["health", "healthy", "wellness", "lifestyle", "prevention", "checkup", "doctor"]),
    (Category::DiseasePrevention, &["disease", "prevent", "cancer", "diabetes", "blood pressure", "cholesterol"]),
];

/// The raw tables a [`KnowledgeBase`] is validated from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeTables {
    pub knowledge: Vec<KnowledgeEntry>,
    pub symptoms: Vec<SymptomEntry>,
    pub emergencies: Vec<EmergencyEntry>,
    pub greetings: Vec<String>,
    pub fallbacks: Vec<String>,
    pub category_keywords: Vec<CategoryKeywords>,
}

impl KnowledgeTables {
    pub fn builtin() -> Self {
        let knowledge = KNOWLEDGE
            .iter()
            .flat_map(|(category, items)| items.iter().map(move |a| KnowledgeEntry { category: *category, advice: (*a).to_string() }))
            .collect();
        let symptoms = SYMPTOMS.iter().map(|(s, a)| SymptomEntry { symptom: (*s).to_string(), advice: (*a).to_string() }).collect();
        let emergencies = EMERGENCIES.iter().map(|(t, a)| EmergencyEntry { trigger: (*t).to_string(), alert: (*a).to_string() }).collect();
        let category_keywords = CATEGORY_KEYWORDS
            .iter()
            .map(|(category, kws)| CategoryKeywords { category: *category, keywords: kws.iter().map(|k| (*k).to_string()).collect() })
            .collect();
        Self {
            knowledge,
            symptoms,
            emergencies,
            greetings: GREETINGS.iter().map(|g| (*g).to_string()).collect(),
            fallbacks: FALLBACKS.iter().map(|f| (*f).to_string()).collect(),
            category_keywords,
        }
    }
}

/// Validated, immutable knowledge tables.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    tables: KnowledgeTables,
}

impl KnowledgeBase {
    /// Validates `tables`. Every table must be non-empty and every category
    /// a fallback can land on must have at least one entry.
    pub fn new(tables: KnowledgeTables) -> Result<Self> {
        if tables.knowledge.is_empty() { return Err(Error::EmptyTable("knowledge")); }
        if tables.symptoms.is_empty() { return Err(Error::EmptyTable("symptoms")); }
        if tables.emergencies.is_empty() { return Err(Error::EmptyTable("emergencies")); }
        if tables.greetings.is_empty() { return Err(Error::EmptyTable("greetings")); }
        if tables.fallbacks.is_empty() { return Err(Error::EmptyTable("fallbacks")); }
        if tables.category_keywords.is_empty() { return Err(Error::EmptyTable("category_keywords")); }

        let has_entries = |c: Category| tables.knowledge.iter().any(|k| k.category == c);
        if !has_entries(Category::GeneralHealth) {
            return Err(Error::InvalidConfig("no knowledge entries for general_health".into()));
        }
        for ck in &tables.category_keywords {
            if ck.keywords.is_empty() {
                return Err(Error::InvalidConfig(format!("no keywords for category {}", ck.category)));
            }
            if !has_entries(ck.category) {
                return Err(Error::InvalidConfig(format!("no knowledge entries for category {}", ck.category)));
            }
        }
        Ok(Self { tables })
    }

    pub fn builtin() -> Result<Self> { Self::new(KnowledgeTables::builtin()) }

    /// The retrieval corpus derived from these tables.
    pub fn corpus(&self) -> Result<Corpus> { Corpus::from_knowledge(self) }

    pub fn knowledge(&self) -> &[KnowledgeEntry] { &self.tables.knowledge }
    pub fn symptoms(&self) -> &[SymptomEntry] { &self.tables.symptoms }
    pub fn emergencies(&self) -> &[EmergencyEntry] { &self.tables.emergencies }
    pub fn greetings(&self) -> &[String] { &self.tables.greetings }
    pub fn fallbacks(&self) -> &[String] { &self.tables.fallbacks }
    pub fn category_keywords(&self) -> &[CategoryKeywords] { &self.tables.category_keywords }

    /// Advice strings of one category, in table order.
    pub fn advice_in(&self, category: Category) -> Vec<&str> {
        self.tables.knowledge.iter().filter(|k| k.category == category).map(|k| k.advice.as_str()).collect()
    }
}
