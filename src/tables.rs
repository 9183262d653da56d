//! Static reference data: month table, weekday names and the event catalog.

use chrono::Weekday;

use crate::types::{HijriMonth, IslamicEvent, Language, MonthInfo};

/// Look up the static table entry for a month.
pub fn month_info(month: HijriMonth) -> &'static MonthInfo {
    match month {
        HijriMonth::Muharram => &MonthInfo {
            name: "Muharram",
            name_ar: "محرم",
            days: 30,
        },
        HijriMonth::Safar => &MonthInfo {
            name: "Safar",
            name_ar: "صفر",
            days: 29,
        },
        HijriMonth::RabiAlAwwal => &MonthInfo {
            name: "Rabi' al-Awwal",
            name_ar: "ربيع الأول",
            days: 30,
        },
        HijriMonth::RabiAlThani => &MonthInfo {
            name: "Rabi' al-Thani",
            name_ar: "ربيع الآخر",
            days: 29,
        },
        HijriMonth::JumadaAlAwwal => &MonthInfo {
            name: "Jumada al-Awwal",
            name_ar: "جمادى الأولى",
            days: 30,
        },
        HijriMonth::JumadaAlThani => &MonthInfo {
            name: "Jumada al-Thani",
            name_ar: "جمادى الآخرة",
            days: 29,
        },
        HijriMonth::Rajab => &MonthInfo {
            name: "Rajab",
            name_ar: "رجب",
            days: 30,
        },
        HijriMonth::Shaban => &MonthInfo {
            name: "Sha'ban",
            name_ar: "شعبان",
            days: 29,
        },
        HijriMonth::Ramadan => &MonthInfo {
            name: "Ramadan",
            name_ar: "رمضان",
            days: 30,
        },
        HijriMonth::Shawwal => &MonthInfo {
            name: "Shawwal",
            name_ar: "شوال",
            days: 29,
        },
        HijriMonth::DhuAlQidah => &MonthInfo {
            name: "Dhu al-Qi'dah",
            name_ar: "ذو القعدة",
            days: 30,
        },
        HijriMonth::DhuAlHijjah => &MonthInfo {
            name: "Dhu al-Hijjah",
            name_ar: "ذو الحجة",
            days: 29,
        },
    }
}

/// Month name in the requested language.
pub fn month_name(month: HijriMonth, language: Language) -> &'static str {
    let info = month_info(month);
    match language {
        Language::Arabic => info.name_ar,
        Language::English => info.name,
    }
}

pub fn weekday_name_ar(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "الأحد",
        Weekday::Mon => "الإثنين",
        Weekday::Tue => "الثلاثاء",
        Weekday::Wed => "الأربعاء",
        Weekday::Thu => "الخميس",
        Weekday::Fri => "الجمعة",
        Weekday::Sat => "السبت",
    }
}

pub fn weekday_name_en(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Two-column weekday label for grid headers.
pub fn weekday_short_name(weekday: Weekday, language: Language) -> &'static str {
    match language {
        Language::English => match weekday {
            Weekday::Sun => "Su",
            Weekday::Mon => "Mo",
            Weekday::Tue => "Tu",
            Weekday::Wed => "We",
            Weekday::Thu => "Th",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
        },
        Language::Arabic => match weekday {
            Weekday::Sun => " ح",
            Weekday::Mon => " ن",
            Weekday::Tue => " ث",
            Weekday::Wed => " ر",
            Weekday::Thu => " خ",
            Weekday::Fri => " ج",
            Weekday::Sat => " س",
        },
    }
}

/// Fixed-date Islamic events, in calendar order.
pub static ISLAMIC_EVENTS: [IslamicEvent; 8] = [
    IslamicEvent {
        name: "Islamic New Year",
        name_ar: "رأس السنة الهجرية",
        month: HijriMonth::Muharram,
        day: 1,
        description: "First day of the Hijri year",
        description_ar: "بداية السنة الهجرية الجديدة",
        is_holiday: false,
    },
    IslamicEvent {
        name: "Ashura",
        name_ar: "يوم عاشوراء",
        month: HijriMonth::Muharram,
        day: 10,
        description: "Tenth day of Muharram",
        description_ar: "العاشر من شهر محرم",
        is_holiday: false,
    },
    IslamicEvent {
        name: "Mawlid an-Nabi",
        name_ar: "المولد النبوي",
        month: HijriMonth::RabiAlAwwal,
        day: 12,
        description: "Birth of the Prophet",
        description_ar: "ذكرى مولد النبي",
        is_holiday: false,
    },
    IslamicEvent {
        name: "Isra and Mi'raj",
        name_ar: "الإسراء والمعراج",
        month: HijriMonth::Rajab,
        day: 27,
        description: "The Night Journey",
        description_ar: "ذكرى الإسراء والمعراج",
        is_holiday: false,
    },
    IslamicEvent {
        name: "Start of Ramadan",
        name_ar: "بداية شهر رمضان",
        month: HijriMonth::Ramadan,
        day: 1,
        description: "First day of the month of fasting",
        description_ar: "أول أيام شهر الصيام",
        is_holiday: false,
    },
    IslamicEvent {
        name: "Laylat al-Qadr",
        name_ar: "ليلة القدر",
        month: HijriMonth::Ramadan,
        day: 27,
        description: "The Night of Decree",
        description_ar: "ليلة القدر المباركة",
        is_holiday: false,
    },
    IslamicEvent {
        name: "Eid al-Fitr",
        name_ar: "عيد الفطر",
        month: HijriMonth::Shawwal,
        day: 1,
        description: "Festival marking the end of Ramadan",
        description_ar: "عيد الفطر المبارك",
        is_holiday: true,
    },
    IslamicEvent {
        name: "Eid al-Adha",
        name_ar: "عيد الأضحى",
        month: HijriMonth::DhuAlHijjah,
        day: 10,
        description: "Festival of the Sacrifice",
        description_ar: "عيد الأضحى المبارك",
        is_holiday: true,
    },
];

/// Event name in the requested language.
pub fn event_name(event: &IslamicEvent, language: Language) -> &'static str {
    match language {
        Language::Arabic => event.name_ar,
        Language::English => event.name,
    }
}

/// Whether a holiday event falls on the given month and day.
pub fn is_holiday(month: HijriMonth, day: u32) -> bool {
    ISLAMIC_EVENTS
        .iter()
        .any(|e| e.is_holiday && e.month == month && e.day == day)
}
