/// Master pool the shipped puzzle draws its target words from.
pub const WORD_POOL: &[&str] = &[
    "행복", "기쁨", "사랑", "평화", "희망", "건강", "웃음", "감사",
    "용기", "지혜", "성장", "발전", "성공", "미래", "소망", "도전",
    "열정", "긍정", "자유", "평온", "신뢰", "배려", "나눔", "화합",
    "창조", "무궁화", "풍요", "순수", "진실", "정의", "아름다움", "따뜻함",
    "밝음", "새싹", "햇살", "무지개", "하늘", "바다", "선물", "축복",
    "환희", "영광", "승리", "진달래", "안정", "조화", "포용",
    "이해", "존중", "친절", "예의", "예감", "예쁨", "소나기", "개나리",
    "꽃잔디", "꽃밭", "꽃봉오리", "연필", "책상", "책임", "두꺼비", "개구리",
    "소풍", "놀이터", "황소", "소나무", "소녀", "소년", "금반지", "소라",
    "위로", "휴식", "여유", "낭만", "설렘", "감동", "행운", "단풍", "눈꽃", "별빛",
    "달빛", "다정", "마음", "친구", "가족", "인연", "추억", "보람",
];

/// The master pool as owned strings, keeping only words long enough to place.
pub fn default_word_pool() -> Vec<String> {
    WORD_POOL
        .iter()
        .filter(|word| word.chars().count() >= 2)
        .map(|&word| word.to_owned())
        .collect()
}
