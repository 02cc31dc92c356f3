//! Static Light Rail station reference table.
//!
//! The station list is fixed network data produced out-of-band; it is
//! loaded into the binary at build time and never changes at runtime.
//! Lookups are by the same opaque ids the schedule API uses.

use std::fmt;

use crate::domain::StationId;

/// Reference data for one Light Rail stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationInfo {
    /// API station id.
    pub id: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Chinese name.
    pub name_ch: &'static str,
}

impl fmt::Display for StationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name_en, self.name_ch)
    }
}

/// All 68 Light Rail stops, in network order.
pub static STATIONS: [StationInfo; 68] = [
    StationInfo { id: "1", name_en: "Tuen Mun Ferry Pier", name_ch: "屯門碼頭" },
    StationInfo { id: "10", name_en: "Melody Garden", name_ch: "美樂" },
    StationInfo { id: "15", name_en: "Butterfly", name_ch: "蝴蝶" },
    StationInfo { id: "20", name_en: "Light Rail Depot", name_ch: "輕鐵車廠" },
    StationInfo { id: "30", name_en: "Lung Mun", name_ch: "龍門" },
    StationInfo { id: "40", name_en: "Tsing Shan Tsuen", name_ch: "青山村" },
    StationInfo { id: "50", name_en: "Tsing Wun", name_ch: "青雲" },
    StationInfo { id: "60", name_en: "Kin On", name_ch: "建安" },
    StationInfo { id: "70", name_en: "Ho Tin", name_ch: "河田" },
    StationInfo { id: "75", name_en: "Choy Yee Bridge", name_ch: "蔡意橋" },
    StationInfo { id: "80", name_en: "Affluence", name_ch: "澤豐" },
    StationInfo { id: "90", name_en: "Tuen Mun Hospital", name_ch: "屯門醫院" },
    StationInfo { id: "100", name_en: "Siu Hong", name_ch: "兆康" },
    StationInfo { id: "110", name_en: "Kei Lun", name_ch: "麒麟" },
    StationInfo { id: "120", name_en: "Ching Chung", name_ch: "青松" },
    StationInfo { id: "130", name_en: "Kin Sang", name_ch: "建生" },
    StationInfo { id: "140", name_en: "Tin King", name_ch: "田景" },
    StationInfo { id: "150", name_en: "Leung King", name_ch: "良景" },
    StationInfo { id: "160", name_en: "San Wai", name_ch: "新圍" },
    StationInfo { id: "170", name_en: "Shek Pai", name_ch: "石排" },
    StationInfo { id: "180", name_en: "Shan King(North)", name_ch: "山景(北)" },
    StationInfo { id: "190", name_en: "Shan King(South)", name_ch: "山景(南)" },
    StationInfo { id: "200", name_en: "Ming Kum", name_ch: "鳴琴" },
    StationInfo { id: "212", name_en: "Tai Hing(North)", name_ch: "大興(北)" },
    StationInfo { id: "220", name_en: "Tai Hing(South)", name_ch: "大興(南)" },
    StationInfo { id: "230", name_en: "Ngan Wai", name_ch: "銀圍" },
    StationInfo { id: "240", name_en: "Siu Hei", name_ch: "兆禧" },
    StationInfo { id: "250", name_en: "Tuen Mun Swimming Pool", name_ch: "屯門泳池" },
    StationInfo { id: "260", name_en: "Goodview Garden", name_ch: "豐景園" },
    StationInfo { id: "265", name_en: "Siu Lun", name_ch: "兆麟" },
    StationInfo { id: "270", name_en: "On Ting", name_ch: "安定" },
    StationInfo { id: "275", name_en: "Yau Oi", name_ch: "友愛" },
    StationInfo { id: "280", name_en: "Town Centre", name_ch: "市中心" },
    StationInfo { id: "295", name_en: "Tuen Mun", name_ch: "屯門" },
    StationInfo { id: "300", name_en: "Pui To", name_ch: "杯渡" },
    StationInfo { id: "310", name_en: "Hoh Fuk Tong", name_ch: "何福堂" },
    StationInfo { id: "320", name_en: "San Hui", name_ch: "新墟" },
    StationInfo { id: "330", name_en: "Prime View", name_ch: "景峰" },
    StationInfo { id: "340", name_en: "Fung Tei", name_ch: "鳳地" },
    StationInfo { id: "350", name_en: "Lam Tei", name_ch: "藍地" },
    StationInfo { id: "360", name_en: "Nai Wai", name_ch: "泥圍" },
    StationInfo { id: "370", name_en: "Chung Uk Tsuen", name_ch: "鍾屋村" },
    StationInfo { id: "380", name_en: "Hung Shui Kiu", name_ch: "洪水橋" },
    StationInfo { id: "390", name_en: "Tong Fong Tsuen", name_ch: "塘坊村" },
    StationInfo { id: "400", name_en: "Ping Shan", name_ch: "屏山" },
    StationInfo { id: "425", name_en: "Hang Mei Tsuen", name_ch: "坑尾村" },
    StationInfo { id: "430", name_en: "Tin Shui Wai", name_ch: "天水圍" },
    StationInfo { id: "435", name_en: "Tin Tsz", name_ch: "天慈" },
    StationInfo { id: "445", name_en: "Tin Yiu", name_ch: "天耀" },
    StationInfo { id: "448", name_en: "Locwood", name_ch: "樂湖" },
    StationInfo { id: "450", name_en: "Tin Wu", name_ch: "天湖" },
    StationInfo { id: "455", name_en: "Ginza", name_ch: "銀座" },
    StationInfo { id: "460", name_en: "Tin Shui", name_ch: "天瑞" },
    StationInfo { id: "468", name_en: "Chung Fu", name_ch: "頌富" },
    StationInfo { id: "480", name_en: "Tin Fu", name_ch: "天富" },
    StationInfo { id: "490", name_en: "Chestwood", name_ch: "翠湖" },
    StationInfo { id: "500", name_en: "Tin Wing", name_ch: "天榮" },
    StationInfo { id: "510", name_en: "Tin Yuet", name_ch: "天悅" },
    StationInfo { id: "520", name_en: "Tin Sau", name_ch: "天秀" },
    StationInfo { id: "530", name_en: "Wetland Park", name_ch: "濕地公園" },
    StationInfo { id: "540", name_en: "Tin Heng", name_ch: "天恒" },
    StationInfo { id: "550", name_en: "Tin Yat", name_ch: "天逸" },
    StationInfo { id: "560", name_en: "Shui Pin Wai", name_ch: "水邊圍" },
    StationInfo { id: "570", name_en: "Fung Nin Road", name_ch: "豐年路" },
    StationInfo { id: "580", name_en: "Hong Lok Road", name_ch: "康樂路" },
    StationInfo { id: "590", name_en: "Tai Tong Road", name_ch: "大棠路" },
    StationInfo { id: "600", name_en: "Yuen Long", name_ch: "元朗" },
    StationInfo { id: "920", name_en: "Sam Shing", name_ch: "三聖" },
];

/// Look up a station by id.
pub fn by_id(id: &StationId) -> Option<&'static StationInfo> {
    STATIONS.iter().find(|s| s.id == id.as_str())
}

/// All known stations.
pub fn all() -> &'static [StationInfo] {
    &STATIONS
}
