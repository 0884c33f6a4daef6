/// Topics that earn a headline the keyword bonus.
const RATING_KEYWORDS: [&str; 7] = ["경제", "정치", "기술", "사회", "국제", "문화", "스포츠"];

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Heuristic quality score in half steps between 1.0 and 5.0.
///
/// Starts at 3.0 and adds 0.5 for each of: a title over 10 characters, a
/// title over 30 characters, a description over 50 characters, a description
/// over 100 characters, and a topic keyword anywhere in the text.
pub fn rate(title: &str, description: &str) -> f64 {
    let title_len = title.chars().count();
    let description_len = description.chars().count();

    let mut score = 3.0;
    if title_len > 10 {
        score += 0.5;
    }
    if title_len > 30 {
        score += 0.5;
    }
    if description_len > 50 {
        score += 0.5;
    }
    if description_len > 100 {
        score += 0.5;
    }
    if RATING_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword) || description.contains(keyword))
    {
        score += 0.5;
    }

    ((score * 2.0_f64).round() / 2.0).clamp(MIN_RATING, MAX_RATING)
}

/// True for values in {1.0, 1.5, ..., 5.0}.
pub fn is_valid_rating(rating: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating) && (rating * 2.0).fract() == 0.0
}
