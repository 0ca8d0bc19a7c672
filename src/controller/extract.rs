use scraper::{ElementRef, Html, Selector};

use crate::error::AppError;

/// Heading ids look like `match-day-2024-04-06`.
pub const DAY_ID_PREFIX: &str = "match-day-";

/// Fields of one football row, exactly as they appear in the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMatch {
    pub name: String,
    pub league: String,
    /// Text of every anchor nested in the league cell.
    pub league_links: Vec<String>,
    pub channel: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDay {
    pub day: String,
    pub rows: Vec<RawMatch>,
}

struct Selectors {
    heading: Selector,
    day_inner: Selector,
    row: Selector,
    name: Selector,
    league: Selector,
    link: Selector,
    channel: Selector,
    time: Selector,
}

impl Selectors {
    fn new() -> Result<Self, AppError> {
        Ok(Self {
            heading: Selector::parse("h2.day-name")?,
            day_inner: Selector::parse("span.day-name-inner")?,
            row: Selector::parse(".sport-name-fotboll")?,
            name: Selector::parse(".match-name")?,
            league: Selector::parse(".league")?,
            link: Selector::parse("a")?,
            channel: Selector::parse(".channel .channel-item")?,
            time: Selector::parse(".time .field-content")?,
        })
    }
}

/// Walks the first `max_days` day headings and collects the football rows
/// from the block that follows each of them.
///
/// # Errors
///
/// Will return `Err` if the document has no day heading at all, which means
/// the page is not a schedule page (or its layout changed).
pub fn extract(doc: &Html, max_days: usize) -> Result<Vec<RawDay>, AppError> {
    let sel = Selectors::new()?;

    let headings: Vec<ElementRef> = doc.select(&sel.heading).collect();
    if headings.is_empty() {
        return Err(AppError::Parse("no day headings in document".to_string()));
    }

    let days = headings
        .into_iter()
        .take(max_days)
        .map(|heading| {
            let day = heading
                .select(&sel.day_inner)
                .next()
                .and_then(|inner| inner.value().attr("id"))
                .unwrap_or_default()
                .replace(DAY_ID_PREFIX, "");

            // the match table is whatever element comes right after the heading
            let rows = heading
                .next_siblings()
                .find_map(ElementRef::wrap)
                .map(|table| {
                    table
                        .select(&sel.row)
                        .map(|row| raw_match(row, &sel))
                        .collect()
                })
                .unwrap_or_default();

            RawDay { day, rows }
        })
        .collect();

    Ok(days)
}

fn raw_match(row: ElementRef, sel: &Selectors) -> RawMatch {
    let league_links = row
        .select(&sel.league)
        .flat_map(|league| league.select(&sel.link))
        .map(|a| a.text().collect::<String>())
        .collect();

    let channel = row
        .select(&sel.channel)
        .next()
        .and_then(|c| c.value().attr("title"))
        .unwrap_or_default()
        .to_string();

    RawMatch {
        name: text_of(row, &sel.name),
        league: text_of(row, &sel.league),
        league_links,
        channel,
        time: text_of(row, &sel.time),
    }
}

/// Concatenated text of every element under `root` matching `selector`.
fn text_of(root: ElementRef, selector: &Selector) -> String {
    root.select(selector).flat_map(|e| e.text()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <h2 class="day-name"><span class="day-name-inner" id="match-day-2024-04-06">Lördag</span></h2>
        <div class="view">
          <div class="sport-name-fotboll">
            <span class="match-name">Arsenal - Chelsea</span>
            <span class="league">England <a href="/pl">Premier League</a> Premier League</span>
            <span class="channel"><span class="channel-item" title="Viaplay"></span></span>
            <span class="time"><span class="field-content">18:30</span></span>
          </div>
          <div class="sport-name-hockey">
            <span class="match-name">Frölunda - Luleå</span>
          </div>
        </div>
        <h2 class="day-name"><span class="day-name-inner">Söndag</span></h2>
    "#;

    #[test]
    fn reads_fields_of_football_rows() {
        let doc = Html::parse_document(PAGE);
        let days = extract(&doc, 3).unwrap();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, "2024-04-06");
        assert_eq!(days[0].rows.len(), 1);

        let row = &days[0].rows[0];
        assert_eq!(row.name, "Arsenal - Chelsea");
        assert_eq!(row.league_links, vec!["Premier League".to_string()]);
        assert_eq!(row.channel, "Viaplay");
        assert_eq!(row.time, "18:30");
    }

    #[test]
    fn heading_without_table_or_id_is_empty_day() {
        let doc = Html::parse_document(PAGE);
        let days = extract(&doc, 3).unwrap();
        assert_eq!(days[1].day, "");
        assert!(days[1].rows.is_empty());
    }

    #[test]
    fn missing_channel_degrades_to_empty() {
        let doc = Html::parse_document(
            r#"<h2 class="day-name"><span class="day-name-inner" id="match-day-x"></span></h2>
               <div><div class="sport-name-fotboll"><span class="match-name">A - B</span></div></div>"#,
        );
        let days = extract(&doc, 3).unwrap();
        assert_eq!(days[0].rows[0].channel, "");
        assert_eq!(days[0].rows[0].time, "");
    }

    #[test]
    fn no_headings_is_a_parse_error() {
        let doc = Html::parse_document("<html><body><p>Underhåll</p></body></html>");
        assert!(matches!(extract(&doc, 3), Err(AppError::Parse(_))));
    }
}
