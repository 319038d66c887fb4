//! Static keyword dictionaries shared by the normalizer and the extractor.
//!
//! Everything here is plain data. Pattern compilation lives in `skills.rs`.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::models::Category;

/// Standard English stop-word list (NLTK corpus).
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

pub static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Canonical skill phrases recognised in resumes.
pub const SKILLS: &[&str] = &[
    // languages & frameworks
    "python", "java", "javascript", "typescript", "c++", "c#", "go", "ruby", "php", "swift",
    "kotlin", "r", "sas", "matlab", "react", "node.js", "angular", "vue.js", "express.js",
    "django", "flask", "spring", "hibernate", "laravel", "symfony",
    // data & infrastructure
    "sql", "mongodb", "postgresql", "mysql", "oracle", "redis", "cassandra", "database",
    "aws", "azure", "gcp", "cloud", "docker", "kubernetes", "terraform", "ansible", "jenkins",
    "gitlab ci", "devops", "backend", "fullstack", "api", "rest", "graphql", "microservices",
    "network", "cybersecurity", "blockchain", "iot", "robotics", "mobile development",
    "android", "ios", "web development",
    // data science
    "machine learning", "deep learning", "neural networks", "data analysis", "data science",
    "artificial intelligence", "natural language processing", "computer vision",
    "statistical analysis", "quantitative analysis", "tableau", "power bi", "excel",
    "google analytics",
    // quality
    "qa", "testing", "automation", "manual testing", "usability testing",
    // process & management
    "project management", "product management", "operations management", "change management",
    "risk management", "agile", "scrum", "jira", "confluence", "leadership", "communication",
    "business development", "supply chain", "supply chain optimization", "logistics",
    "logistics planning", "inventory management",
    // business suites
    "microsoft office", "google suite", "powerpoint", "word", "salesforce", "sap", "erp", "crm",
    // marketing & content
    "seo", "marketing", "ppc", "email marketing", "social media", "social media marketing",
    "influencer marketing", "content creation", "content strategy", "copywriting", "editing",
    "proofreading", "storytelling", "public relations", "brand management", "market research",
    // finance
    "finance", "accounting", "auditing", "investment", "financial analysis",
    "financial reporting", "budgeting", "forecasting", "tax preparation", "compliance",
    // people
    "hr", "recruitment", "talent acquisition", "employee relations", "employee engagement",
    "performance management", "compensation & benefits", "organizational development",
    "training",
    // sales & service
    "sales", "sales strategy", "lead generation", "cold calling", "negotiation",
    "client management", "customer relationship management", "customer service",
    "technical support",
    // engineering
    "engineering", "autocad", "solidworks", "catia", "revit", "bim", "fea", "cfd", "simulink",
    "circuit design", "embedded systems", "firmware", "hardware", "manufacturing processes",
    // design & media
    "design", "ui/ux", "figma", "photoshop", "graphic design", "illustration", "user research",
    "wireframing", "prototyping", "information architecture", "interaction design",
    "visual design", "brand identity", "print design", "digital art", "video editing",
    "video production", "animation", "motion graphics", "3d modeling", "maya", "blender",
    "cinema 4d",
    // soft skills
    "public speaking", "presentation skills", "problem-solving", "critical thinking",
    "adaptability", "teamwork", "collaboration", "creativity", "innovation",
    "attention to detail",
];

/// Categories in evaluation order. The first category with any keyword hit wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Tech,
        &[
            "software", "developer", "engineer", "python", "java", "javascript", "react",
            "node.js", "sql", "aws", "cloud", "devops", "kubernetes", "machine learning",
            "data science", "artificial intelligence", "cybersecurity", "network", "database",
            "backend", "fullstack", "mobile development", "android", "ios", "web development",
            "algorithm", "api", "microservices", "agile", "scrum", "git", "linux",
            "windows server", "azure", "gcp", "programming", "development", "coding", "django",
            "flask", "typescript", "c++", "c#", "go", "ruby", "php", "swift", "kotlin", "rest",
            "graphql", "blockchain", "iot", "nlp", "computer vision", "deep learning",
            "neural networks", "big data", "hadoop", "spark", "kafka", "etl",
            "data warehousing", "business intelligence", "devsecops",
            "site reliability engineer", "sre", "qa engineer", "test automation",
        ],
    ),
    (
        Category::Marketing,
        &[
            "marketing", "seo", "sem", "content", "social media", "brand", "campaign",
            "public relations", "pr", "advertisement", "analytics", "market research",
            "digital marketing", "email marketing", "crm", "google ads", "facebook ads",
            "copywriting", "strategy", "advertising", "ppc", "google analytics",
            "influencer marketing", "content strategy", "storytelling", "media planning",
            "demand generation", "lead generation",
        ],
    ),
    (
        Category::Design,
        &[
            "design", "ui/ux", "graphic", "photoshop", "illustrator", "figma", "sketch",
            "adobe xd", "portfolio", "visual", "creative", "typography", "branding",
            "user experience", "user interface", "web design", "product design", "animation",
            "ux designer", "ui designer", "interaction design", "motion graphics",
            "3d modeling", "industrial design", "fashion design", "interior design",
            "architectural design",
        ],
    ),
    (
        Category::Finance,
        &[
            "finance", "accounting", "audit", "financial analysis", "investment", "banking",
            "tax", "economics", "portfolio", "cpa", "cfa", "bookkeeping", "budget",
            "forecasting", "risk management", "compliance", "financial reporting", "treasury",
            "corporate finance", "wealth management", "financial planning", "equity research",
            "fixed income",
        ],
    ),
    (
        Category::Hr,
        &[
            "hr", "human resources", "recruitment", "talent acquisition", "employee relations",
            "onboarding", "payroll", "benefits", "hrms", "workforce", "compensation",
            "training", "organizational development", "performance management",
            "employee engagement", "hr business partner", "diversity and inclusion",
            "learning and development",
        ],
    ),
    (
        Category::Sales,
        &[
            "sales", "business development", "account management", "client relations", "crm",
            "negotiation", "lead generation", "quota", "revenue", "customer acquisition",
            "sales strategy", "cold calling", "sales operations", "channel sales",
            "enterprise sales", "solution selling", "key account management",
        ],
    ),
    (
        Category::Engineering,
        &[
            "engineer", "mechanical", "electrical", "civil", "chemical", "aerospace", "cad",
            "autocad", "solidworks", "matlab", "simulation", "design", "manufacturing", "r&d",
            "research and development", "structural", "systems", "mechatronics", "robotics",
            "automation", "circuit design", "embedded systems", "firmware", "hardware design",
            "process engineering", "quality engineering", "industrial engineering",
            "biomedical engineering",
        ],
    ),
    (
        Category::SocialMedia,
        &[
            "social media", "instagram", "facebook", "twitter", "linkedin", "tiktok",
            "community management", "influencer", "content creation", "engagement",
            "hootsuite", "buffer", "social media strategy", "social media marketing",
            "platform management", "online community",
        ],
    ),
    (
        Category::Operations,
        &[
            "operations", "logistics", "supply chain", "procurement", "inventory management",
            "process improvement", "lean manufacturing", "six sigma", "quality control",
            "project management office", "pmo", "business operations",
            "operational excellence",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "healthcare", "medical", "clinical", "nurse", "doctor", "physician", "hospital",
            "patient care", "pharmacist", "biotechnology", "pharmaceutical", "research",
            "dentist", "therapist", "public health", "epidemiology", "health administration",
        ],
    ),
    (
        Category::Education,
        &[
            "education", "teacher", "professor", "instructor", "curriculum development",
            "e-learning", "academic advising", "student affairs", "higher education", "k-12",
            "educational technology", "tutoring", "training development",
        ],
    ),
    (
        Category::CustomerService,
        &[
            "customer service", "customer support", "client support", "help desk",
            "technical support", "call center", "customer relations", "service desk",
            "customer success", "client success", "support specialist",
        ],
    ),
    (
        Category::Legal,
        &[
            "legal", "law", "attorney", "lawyer", "paralegal", "litigation", "corporate law",
            "compliance", "intellectual property", "contract law", "legal research", "juris",
            "esq",
        ],
    ),
    (
        Category::ProjectManagement,
        &[
            "project management", "pmp", "scrum master", "agile coach", "product owner",
            "program management", "portfolio management", "jira", "confluence", "trello",
            "asana", "risk management", "stakeholder management", "budget management",
        ],
    ),
];

/// Generic role nouns that earn the `Other` label when no category matched.
pub const GENERIC_ROLE_NOUNS: &[&str] =
    &["analyst", "consultant", "specialist", "manager", "coordinator"];

/// Every single word used by a dictionary phrase, with and without internal
/// dots. The lemmatizer leaves these alone so that e.g. `sales`, `nodejs` or
/// `kubernetes` still match after normalization.
pub static DICTIONARY_TERMS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let category_keywords = CATEGORY_KEYWORDS
        .iter()
        .flat_map(|&(_, keywords)| keywords.iter().copied());

    SKILLS
        .iter()
        .copied()
        .chain(category_keywords)
        .chain(GENERIC_ROLE_NOUNS.iter().copied())
        .flat_map(str::split_whitespace)
        .flat_map(|word| [word.to_string(), word.replace('.', "")])
        .collect()
});
