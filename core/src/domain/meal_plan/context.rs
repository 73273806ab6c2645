/// Where the suggested food is expected to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodContext {
    ConvenienceStore,
    DiningOut,
    HomeCooked,
    Default,
}

/// Checked in this order; the first marker found in the notes wins.
const PRIORITY: [FoodContext; 3] = [
    FoodContext::ConvenienceStore,
    FoodContext::DiningOut,
    FoodContext::HomeCooked,
];

impl FoodContext {
    pub fn marker(self) -> Option<&'static str> {
        match self {
            FoodContext::ConvenienceStore => Some("편의점"),
            FoodContext::DiningOut => Some("외식"),
            FoodContext::HomeCooked => Some("집"),
            FoodContext::Default => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FoodContext::ConvenienceStore => {
                "한국 편의점(GS25, CU, 세븐일레븐)에서 실제 구매 가능한 식품 기준"
            }
            FoodContext::DiningOut => "한국 프랜차이즈 외식 기준",
            FoodContext::HomeCooked => "가정에서 조리 가능한 식단 기준",
            FoodContext::Default => "일반적인 가정식 기준",
        }
    }
}

pub fn classify(notes: &str) -> FoodContext {
    PRIORITY
        .into_iter()
        .find(|context| context.marker().is_some_and(|marker| notes.contains(marker)))
        .unwrap_or(FoodContext::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_markers() {
        assert_eq!(classify("편의점에서 살게요"), FoodContext::ConvenienceStore);
        assert_eq!(classify("오늘은 외식"), FoodContext::DiningOut);
        assert_eq!(classify("집에서 해먹을래요"), FoodContext::HomeCooked);
    }

    #[test]
    fn test_convenience_store_beats_dining_out() {
        assert_eq!(
            classify("외식 말고 편의점"),
            FoodContext::ConvenienceStore
        );
        assert_eq!(
            classify("편의점 아니면 외식, 집은 안돼요"),
            FoodContext::ConvenienceStore
        );
    }

    #[test]
    fn test_dining_out_beats_home_cooked() {
        assert_eq!(classify("집 근처 외식"), FoodContext::DiningOut);
    }

    #[test]
    fn test_no_marker_is_default() {
        assert_eq!(classify(""), FoodContext::Default);
        assert_eq!(classify("단백질 많이"), FoodContext::Default);
        assert_eq!(classify("convenience store"), FoodContext::Default);
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let all = [
            FoodContext::ConvenienceStore,
            FoodContext::DiningOut,
            FoodContext::HomeCooked,
            FoodContext::Default,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.description(), b.description());
            }
        }
    }
}
