//! Developer page copy: selling points, quick-start samples and API tiers.

use super::Highlight;

pub static API_FEATURES: [Highlight; 4] = [
    Highlight {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Sub-second response times with global CDN distribution.",
    },
    Highlight {
        icon: "🛡",
        title: "Enterprise Security",
        description: "SOC2 compliant with end-to-end encryption.",
    },
    Highlight {
        icon: "🌐",
        title: "100+ Languages",
        description: "Support for all major languages with high accuracy.",
    },
    Highlight {
        icon: "</>",
        title: "RESTful API",
        description: "Simple, well-documented REST API with JSON responses.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLanguage {
    JavaScript,
    Python,
    Curl,
}

impl SampleLanguage {
    pub const ALL: [SampleLanguage; 3] = [Self::JavaScript, Self::Python, Self::Curl];

    pub fn label(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Curl => "cURL",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::JavaScript => JAVASCRIPT_SAMPLE,
            Self::Python => PYTHON_SAMPLE,
            Self::Curl => CURL_SAMPLE,
        }
    }
}

const JAVASCRIPT_SAMPLE: &str = r#"// JavaScript Example
const response = await fetch('https://api.translatepro.com/v1/translate', {
  method: 'POST',
  headers: {
    'Authorization': 'Bearer YOUR_API_KEY',
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
    text: "Hello, how are you?",
    from: "en",
    to: "es",
    analysis: true
  })
});

const data = await response.json();
console.log(data.translation); // "Hola, ¿cómo estás?"
console.log(data.analysis);    // Grammar, tense, idioms etc."#;

const PYTHON_SAMPLE: &str = r#"# Python Example
import requests

url = "https://api.translatepro.com/v1/translate"
headers = {
    "Authorization": "Bearer YOUR_API_KEY",
    "Content-Type": "application/json"
}
data = {
    "text": "Hello, how are you?",
    "from": "en",
    "to": "es",
    "analysis": True
}

response = requests.post(url, headers=headers, json=data)
result = response.json()

print(result["translation"])  # "Hola, ¿cómo estás?"
print(result["analysis"])     # Grammar, tense, idioms etc."#;

const CURL_SAMPLE: &str = r#"# cURL Example
curl -X POST https://api.translatepro.com/v1/translate \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "text": "Hello, how are you?",
    "from": "en",
    "to": "es",
    "analysis": true
  }'"#;

pub const EXAMPLE_RESPONSE: &str = r#"{
  "success": true,
  "translation": "Hola, ¿cómo estás?",
  "from": "en",
  "to": "es",
  "confidence": 0.99,
  "analysis": {
    "type": "sentence",
    "tense": "present_simple",
    "grammar": {
      "subject": "implied_you",
      "verb": "are",
      "modifiers": ["how"]
    },
    "idioms": [],
    "formality": "informal",
    "pronunciation": "ˈhola ˈkomo esˈtas"
  },
  "alternatives": [
    "Hola, ¿qué tal?",
    "Hola, ¿cómo te encuentras?"
  ],
  "usage_count": 1,
  "request_id": "req_abc123"
}"#;

pub const AUTH_HEADER_SAMPLE: &str = "Authorization: Bearer YOUR_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTier {
    pub name: &'static str,
    pub requests: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 3],
}

impl ApiTier {
    pub fn is_enterprise(&self) -> bool {
        self.name == "Enterprise"
    }
}

pub static API_TIERS: [ApiTier; 3] = [
    ApiTier {
        name: "Free",
        requests: "1,000",
        price: "$0",
        features: ["Basic translation", "10 languages", "Email support"],
    },
    ApiTier {
        name: "Pro",
        requests: "100,000",
        price: "$19",
        features: ["Advanced analysis", "100+ languages", "Priority support"],
    },
    ApiTier {
        name: "Enterprise",
        requests: "Unlimited",
        price: "Custom",
        features: ["Custom models", "SLA guarantee", "Dedicated support"],
    },
];
