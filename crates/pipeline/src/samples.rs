use common::NewsItem;

struct SampleItem {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    published_at: &'static str,
    source: &'static str,
    rating: f64,
    tags: &'static [&'static str],
}

/// Served when no provider returns anything.
static SAMPLE_NEWS: [SampleItem; 5] = [
    SampleItem {
        title: "2024년 AI 기술 발전 동향",
        description: "인공지능 기술의 최신 발전 현황과 산업별 적용 사례를 정리한 샘플 기사입니다.",
        url: "https://example.com/news/ai-technology-2024",
        published_at: "2024-01-15T09:00:00Z",
        source: "Tech News",
        rating: 4.5,
        tags: &["기술"],
    },
    SampleItem {
        title: "머신러닝 연구의 새로운 돌파구",
        description: "새로운 머신러닝 알고리즘이 유망한 결과를 보였다는 내용의 샘플 기사입니다.",
        url: "https://example.com/news/machine-learning-breakthrough",
        published_at: "2024-01-15T08:30:00Z",
        source: "Science Daily",
        rating: 4.0,
        tags: &["기술", "사회"],
    },
    SampleItem {
        title: "자동화가 바꿀 산업의 미래",
        description: "향후 몇 년간 자동화가 여러 산업을 어떻게 바꿀지 전망한 샘플 기사입니다.",
        url: "https://example.com/news/future-of-automation",
        published_at: "2024-01-15T08:00:00Z",
        source: "Future Tech",
        rating: 4.0,
        tags: &["경제", "기술"],
    },
    SampleItem {
        title: "글로벌 반도체 시장 전망",
        description: "주요 국가의 반도체 투자 계획과 시장 전망을 다룬 샘플 기사입니다.",
        url: "https://example.com/news/semiconductor-outlook",
        published_at: "2024-01-14T18:00:00Z",
        source: "Market Watch",
        rating: 3.5,
        tags: &["경제", "국제"],
    },
    SampleItem {
        title: "AI 영상 콘텐츠 제작 열풍",
        description: "생성형 AI로 영상을 제작하는 창작자가 늘고 있다는 샘플 기사입니다.",
        url: "https://example.com/news/ai-video-content",
        published_at: "2024-01-14T12:00:00Z",
        source: "Culture Today",
        rating: 3.5,
        tags: &["문화"],
    },
];

pub fn sample_news() -> Vec<NewsItem> {
    SAMPLE_NEWS
        .iter()
        .map(|sample| NewsItem {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            url: sample.url.to_string(),
            image: String::new(),
            published_at: sample.published_at.to_string(),
            source: sample.source.to_string(),
            rating: sample.rating,
            tags: sample.tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::is_valid_rating;
    use crate::MAX_ITEMS;

    #[test]
    fn test_samples_are_well_formed() {
        let samples = sample_news();
        assert!(!samples.is_empty());
        assert!(samples.len() <= MAX_ITEMS);
        for item in &samples {
            assert!(!item.title.is_empty());
            assert!(!item.tags.is_empty());
            assert!(is_valid_rating(item.rating), "bad rating {}", item.rating);
        }
    }
}
