//! Value pools that records are drawn from.
//!
//! Pools are plain immutable values handed to the generator at construction,
//! so tests can inject small, predictable pools.

use health_core::{Locale, ValidationError};

/// How a full name is assembled from its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// Surname followed directly by 1..=`max_given_parts` given-name parts (`王小明`).
    FamilyFirst { max_given_parts: usize },
    /// One given name, a space, then the surname (`Emily Carter`).
    GivenFirst,
}

/// Items of one medical-history category plus its "none" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPool {
    pub items: Vec<String>,
    pub sentinel: String,
}

impl HistoryPool {
    pub fn new(items: &[&str], sentinel: &str) -> Self {
        Self {
            items: to_strings(items),
            sentinel: sentinel.to_string(),
        }
    }
}

/// Every pool and format template used to build one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPools {
    pub name_style: NameStyle,
    pub surnames: Vec<String>,
    pub male_given_names: Vec<String>,
    pub female_given_names: Vec<String>,
    pub addresses: Vec<String>,
    pub email_domains: Vec<String>,
    /// Pattern for the part of the email before `@`
    pub email_user_pattern: String,
    pub phone_pattern: String,
    pub id_number_pattern: String,
    pub allergies: HistoryPool,
    pub chronic_diseases: HistoryPool,
    pub medications: HistoryPool,
    pub surgeries: HistoryPool,
    pub family_history: HistoryPool,
}

impl DataPools {
    /// Built-in pools for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::ZhTw => Self::zh_tw(),
            Locale::EnUs => Self::en_us(),
        }
    }

    /// Traditional Chinese names, Taiwanese districts and mobile numbers.
    pub fn zh_tw() -> Self {
        Self {
            name_style: NameStyle::FamilyFirst { max_given_parts: 2 },
            surnames: to_strings(ZH_SURNAMES),
            male_given_names: to_strings(ZH_MALE_GIVEN),
            female_given_names: to_strings(ZH_FEMALE_GIVEN),
            addresses: to_strings(ZH_ADDRESSES),
            email_domains: to_strings(&["gmail.com", "yahoo.com.tw", "hotmail.com", "outlook.com"]),
            email_user_pattern: "user{rand:4}".to_string(),
            phone_pattern: "09{digits:8}".to_string(),
            id_number_pattern: "{letter}{sex}{digits:7}".to_string(),
            allergies: HistoryPool::new(
                &["花粉", "塵蟎", "海鮮", "堅果", "牛奶", "雞蛋", "大豆", "小麥", "藥物過敏", "動物毛髮", "化學物質"],
                "無已知過敏",
            ),
            chronic_diseases: HistoryPool::new(
                &["高血壓", "糖尿病", "高血脂", "心臟病", "氣喘", "關節炎", "甲狀腺疾病", "腎臟病", "肝病"],
                "無慢性疾病",
            ),
            medications: HistoryPool::new(
                &["降血壓藥", "降血糖藥", "降血脂藥", "心臟藥", "氣喘藥", "止痛藥", "維生素", "鈣片", "魚油"],
                "無服用藥物",
            ),
            surgeries: HistoryPool::new(
                &["闌尾切除", "膽囊切除", "白內障手術", "骨折手術", "心臟手術", "腫瘤切除", "疝氣修補"],
                "無手術史",
            ),
            family_history: HistoryPool::new(
                &["高血壓", "糖尿病", "心臟病", "癌症", "中風", "腎臟病", "精神疾病", "遺傳性疾病"],
                "無家族病史",
            ),
        }
    }

    /// English names, US cities and NANP-style phone numbers.
    pub fn en_us() -> Self {
        Self {
            name_style: NameStyle::GivenFirst,
            surnames: to_strings(EN_SURNAMES),
            male_given_names: to_strings(EN_MALE_GIVEN),
            female_given_names: to_strings(EN_FEMALE_GIVEN),
            addresses: to_strings(EN_ADDRESSES),
            email_domains: to_strings(&["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"]),
            email_user_pattern: "user{rand:4}".to_string(),
            phone_pattern: "({rand:3}) 555-{digits:4}".to_string(),
            // 9xx area numbers are never issued
            id_number_pattern: "9{digits:2}-{digits:2}-{digits:4}".to_string(),
            allergies: HistoryPool::new(
                &["Pollen", "Dust mites", "Shellfish", "Peanuts", "Milk", "Eggs", "Soy", "Wheat", "Penicillin", "Pet dander", "Latex"],
                "No known allergies",
            ),
            chronic_diseases: HistoryPool::new(
                &["Hypertension", "Diabetes", "Hyperlipidemia", "Heart disease", "Asthma", "Arthritis", "Thyroid disease", "Kidney disease", "Liver disease"],
                "No chronic diseases",
            ),
            medications: HistoryPool::new(
                &["Antihypertensive", "Metformin", "Statin", "Beta blocker", "Inhaler", "Ibuprofen", "Multivitamin", "Calcium", "Fish oil"],
                "No medications",
            ),
            surgeries: HistoryPool::new(
                &["Appendectomy", "Cholecystectomy", "Cataract surgery", "Fracture repair", "Heart surgery", "Tumor removal", "Hernia repair"],
                "No surgical history",
            ),
            family_history: HistoryPool::new(
                &["Hypertension", "Diabetes", "Heart disease", "Cancer", "Stroke", "Kidney disease", "Mental illness", "Genetic disorder"],
                "No family history",
            ),
        }
    }

    /// Pools every record draws from must be non-empty.
    ///
    /// History pools may be empty; those categories then only ever hold the
    /// sentinel or nothing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("surnames", &self.surnames),
            ("male_given_names", &self.male_given_names),
            ("female_given_names", &self.female_given_names),
            ("addresses", &self.addresses),
            ("email_domains", &self.email_domains),
        ];
        for (name, pool) in required {
            if pool.is_empty() {
                return Err(ValidationError::EmptyPool(name));
            }
        }
        Ok(())
    }

    /// The "none" sentinel of every history category.
    pub fn sentinels(&self) -> [&str; 5] {
        [
            &self.allergies.sentinel,
            &self.chronic_diseases.sentinel,
            &self.medications.sentinel,
            &self.surgeries.sentinel,
            &self.family_history.sentinel,
        ]
    }
}

impl Default for DataPools {
    fn default() -> Self {
        Self::zh_tw()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const ZH_SURNAMES: &[&str] = &[
    "趙", "錢", "孫", "李", "周", "吳", "鄭", "王", "馮", "陳", "褚", "衛", "蔣", "沈", "韓", "楊",
    "朱", "秦", "尤", "許", "何", "呂", "施", "張", "孔", "曹", "嚴", "華", "金", "魏", "陶", "姜",
    "謝", "鄒", "章", "蘇", "潘", "葛", "范", "彭", "魯", "韋", "馬", "方", "俞", "任", "袁", "柳",
    "鮑", "史", "唐", "費", "廉", "岑", "薛", "雷", "賀", "倪", "湯",
];

const ZH_MALE_GIVEN: &[&str] = &[
    "家", "海", "敬", "群", "安", "書", "新", "城", "星", "天", "敏", "銘", "君", "豪", "偉", "然",
    "軒", "翔", "廷", "恩", "辰", "睿", "宇", "俠", "飛", "寧", "彬", "傑", "東", "奇", "寶", "智",
    "逸", "健", "裕", "福", "博", "榮", "哲", "皓", "輝", "琦", "朗", "昂", "志", "浩", "承", "宸",
    "柏", "禹",
];

const ZH_FEMALE_GIVEN: &[&str] = &[
    "珈", "貝", "楠", "希", "英", "怡", "艾", "雪", "安", "愛", "書", "婷", "妙", "晴", "葶", "歡",
    "娜", "瀟", "敏", "君", "萱", "涵", "恩", "妍", "彤", "妤", "語", "綺", "寧", "美", "可", "嵐",
    "夕", "月", "紅", "雅", "子", "梓", "詩", "宥", "品", "詠", "羽", "芯", "思",
];

const ZH_ADDRESSES: &[&str] = &[
    "台北市信義區", "台北市大安區", "台北市中山區", "台北市松山區", "新北市板橋區", "新北市新莊區",
    "新北市中和區", "新北市永和區", "桃園市桃園區", "桃園市中壢區", "台中市西屯區", "台中市北屯區",
    "台南市東區", "台南市北區", "高雄市左營區", "高雄市三民區",
];

const EN_SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson",
    "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Carter", "Nguyen", "Hill", "Flores",
];

const EN_MALE_GIVEN: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew", "Joshua",
    "Kevin", "Brian", "Ethan", "Noah", "Liam", "Lucas",
];

const EN_FEMALE_GIVEN: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Sandra", "Ashley", "Emily", "Michelle", "Amanda", "Melissa",
    "Olivia", "Emma", "Sophia", "Ava", "Mia", "Chloe",
];

const EN_ADDRESSES: &[&str] = &[
    "Seattle, WA", "Portland, OR", "San Francisco, CA", "Los Angeles, CA", "San Diego, CA",
    "Phoenix, AZ", "Denver, CO", "Austin, TX", "Dallas, TX", "Chicago, IL", "Minneapolis, MN",
    "Atlanta, GA", "Miami, FL", "Boston, MA", "New York, NY", "Philadelphia, PA",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pools_are_valid() {
        assert!(DataPools::zh_tw().validate().is_ok());
        assert!(DataPools::en_us().validate().is_ok());
    }

    #[test]
    fn test_sentinels_not_in_items() {
        for pools in [DataPools::zh_tw(), DataPools::en_us()] {
            for history in [
                &pools.allergies,
                &pools.chronic_diseases,
                &pools.medications,
                &pools.surgeries,
                &pools.family_history,
            ] {
                assert!(!history.items.contains(&history.sentinel));
            }
        }
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(DataPools::zh_tw().sentinels()[0], "無已知過敏");
        assert_eq!(DataPools::en_us().sentinels()[4], "No family history");
    }

    #[test]
    fn test_empty_pool_rejected() {
        let mut pools = DataPools::en_us();
        pools.addresses.clear();
        assert_eq!(
            pools.validate(),
            Err(ValidationError::EmptyPool("addresses"))
        );
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(DataPools::for_locale(Locale::EnUs), DataPools::en_us());
        assert_eq!(DataPools::for_locale(Locale::ZhTw), DataPools::default());
    }
}
