//! Keyword stem tables for the free-text classifiers.
//!
//! Stems are lowercase Russian word prefixes matched through the fuzzy
//! rule in [`crate::domain::lexicon`]. The tables are reference data:
//! extending a list changes stored classification outcomes, so additions
//! go through the same review as a catalogue change.

use super::{Motivation, Segment};

/// Returns the keyword stems signalling a segment.
pub fn segment_keywords(segment: Segment) -> &'static [&'static str] {
    match segment {
        Segment::Creative => &["рису", "твор", "дизайн", "музык", "пишу", "фотограф", "сочин", "стих"],
        Segment::Analytics => &["анализ", "данн", "таблиц", "цифр", "расчет", "статист"],
        Segment::Tech => &["программ", "компьютер", "технолог", "автоматиз", "железо", "кодинг"],
        Segment::HelpPeople => &["помог", "поддерж", "забот", "совет", "выслуш", "волонтер"],
        Segment::Communication => &["общен", "общаюсь", "разговар", "перегов", "знакомл", "собесед"],
        Segment::Organization => &["организ", "планир", "координ", "управл", "контрол", "порядок"],
        Segment::Sales => &["прода", "торг", "клиент", "сделк", "убежда", "магазин"],
        Segment::Education => &["препода", "обуча", "объясня", "настав", "трениру", "учител", "учу"],
        Segment::Craft => &["мастер", "ремонт", "строю", "шью", "вяжу", "столяр", "рукодел", "готовл"],
        Segment::Research => &["исслед", "изуча", "экспери", "наук", "гипотез", "открыт"],
    }
}

/// Returns the keyword stems signalling a motivation driver.
pub fn motivation_keywords(motivation: Motivation) -> &'static [&'static str] {
    match motivation {
        Motivation::Money => &["деньг", "зарплат", "доход", "заработ", "финанс", "богат"],
        Motivation::Meaning => &["смысл", "польз", "мисси", "ценност", "важн", "вклад"],
        Motivation::Recognition => &["призна", "уважен", "похвал", "извест", "оцен", "благодар"],
        Motivation::Freedom => &["свобод", "независ", "гибк", "самостоятел", "путешеств", "график"],
        Motivation::Process => &["процесс", "интерес", "увлека", "нрав", "удовольств", "люб"],
        Motivation::Status => &["статус", "карьер", "должност", "престиж", "руковод", "власт"],
    }
}
