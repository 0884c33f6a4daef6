pub const GENERAL_TAG: &str = "일반";

/// Category label followed by the lowercase keywords that select it.
const CATEGORIES: [(&str, &[&str]); 7] = [
    (
        "경제",
        &["경제", "주식", "증시", "금리", "환율", "부동산", "기업", "투자", "economy", "stock", "market", "finance"],
    ),
    (
        "정치",
        &["정치", "대통령", "국회", "선거", "정부", "여당", "야당", "politic", "election", "government"],
    ),
    (
        "기술",
        &["기술", "인공지능", "반도체", "과학", "로봇", "스마트폰", "소프트웨어", "technology", "tech", "software", "robot"],
    ),
    (
        "사회",
        &["사회", "사건", "사고", "교육", "복지", "노동", "환경", "society", "police", "education"],
    ),
    (
        "국제",
        &["국제", "미국", "중국", "일본", "북한", "유럽", "러시아", "해외", "international", "global", "world"],
    ),
    (
        "문화",
        &["문화", "영화", "음악", "드라마", "예술", "공연", "k-pop", "culture", "movie", "music", "entertainment"],
    ),
    (
        "스포츠",
        &["스포츠", "축구", "야구", "농구", "올림픽", "월드컵", "sport", "football", "soccer", "baseball"],
    ),
];

/// Topic tags for a headline, in category order. Never empty.
pub fn classify(title: &str, description: &str) -> Vec<String> {
    let text = format!("{} {}", title, description).to_lowercase();

    let tags: Vec<String> = CATEGORIES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(label, _)| label.to_string())
        .collect();

    if tags.is_empty() {
        vec![GENERAL_TAG.to_string()]
    } else {
        tags
    }
}
