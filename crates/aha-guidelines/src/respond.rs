//! Turns ranked guidelines into the complete text the agent relays verbatim.

use guideline_store::Document;

const RESPONSE_HEADER: &str =
    "Based on American Heart Association (AHA) guidelines from the MCP server:";

const EMOTIONAL_KEYWORDS: &[&str] = &[
    "stress",
    "anxiety",
    "worried",
    "fear",
    "depressed",
    "sad",
    "overwhelmed",
    "burden",
    "emotional",
    "mental",
    "coping",
    "support",
];

const HEART_FAILURE_KEYWORDS: &[&str] = &["heart failure", "hfref", "hfpef"];
const ARRHYTHMIA_KEYWORDS: &[&str] = &[
    "arrhythmia",
    "afib",
    "atrial fibrillation",
    "svt",
    "bradycardia",
];
const CHEST_PAIN_KEYWORDS: &[&str] = &["chest pain", "angina"];
const HYPERTENSION_KEYWORDS: &[&str] = &["hypertension", "blood pressure", "high bp"];

pub fn no_matches_message(query: &str) -> String {
    format!(
        "I couldn't find any AHA guidelines matching \"{query}\" in the MCP server database. \
         Please try rephrasing your query or searching for a different topic."
    )
}

pub fn format_response(query: &str, results: &[&Document]) -> String {
    if results.is_empty() {
        return no_matches_message(query);
    }

    let mut response = format!("{RESPONSE_HEADER}\n\n");
    for doc in results {
        response.push_str(&format!("{}\n\n", doc.content));
        response.push_str(&format!("Source: {}\n\n", citation(doc)));
    }

    let questions = prompting_questions(query, results.len());
    if !questions.is_empty() {
        response.push_str("\n---\n\nI'd be happy to help you further. ");
        response.push_str(&join_questions(&questions));
    }
    response
}

/// "<title> - <source> (<year>)"
pub fn citation(doc: &Document) -> String {
    format!("{} - {} ({})", doc.title, doc.source, doc.year)
}

/// Follow-up questions chosen from the query text. At most one
/// condition-specific question is included.
pub fn prompting_questions(query: &str, result_count: usize) -> Vec<&'static str> {
    let query = query.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| query.contains(k));

    let mut questions = vec!["Would you like more information on this topic?"];

    if mentions(EMOTIONAL_KEYWORDS) {
        questions.push("Would you like to see support groups or resources for emotional support nearby?");
    }

    questions.push(if mentions(HEART_FAILURE_KEYWORDS) {
        "Would you like me to suggest products or resources to help manage heart failure?"
    } else if mentions(ARRHYTHMIA_KEYWORDS) {
        "Would you like information about monitoring devices or products for managing arrhythmias?"
    } else if mentions(CHEST_PAIN_KEYWORDS) {
        "Would you like guidance on when to seek emergency care or monitoring tools?"
    } else if mentions(HYPERTENSION_KEYWORDS) {
        "Would you like suggestions for blood pressure monitors or lifestyle resources?"
    } else {
        "Would you like me to suggest products or resources related to your question?"
    });

    if result_count > 1 {
        questions.push("Would you like to explore any related topics or specific aspects in more detail?");
    }
    questions
}

/// Joins questions as "Q1 Q2 ... Or qN?" with a single trailing question mark.
fn join_questions(questions: &[&str]) -> String {
    let Some((last, rest)) = questions.split_last() else {
        return String::new();
    };
    let last = last.trim_end_matches('?');
    if rest.is_empty() {
        return format!("{last}?");
    }
    format!("{} Or {}?", rest.join(" "), lowercase_first(last))
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
