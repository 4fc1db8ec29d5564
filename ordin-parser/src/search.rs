//! Search-result parsing
//!
//! The regulation site is queried per jurisdiction with an opaque
//! region/district code pair plus a keyword; fetching is an external
//! collaborator's job. This module covers everything around that fetch
//! that is pure string and markup work: building the percent-encoded
//! search URL, reading the first result entry off a fetched result page,
//! cutting the page parameters out of its click-handler string, and
//! turning the total-result count into a page count.

use crate::dom::Fragment;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Search endpoint of the regulation information system.
pub const SEARCH_ENDPOINT: &str = "https://www.elis.go.kr/main/totSrchList";

/// Regulation page endpoint; takes the parameter pair cut from a result
/// entry's click handler.
pub const PAGE_ENDPOINT: &str = "https://www.elis.go.kr/allalr/selectAlrBdtOne";

/// Result entries shown per search page.
pub const RESULTS_PER_PAGE: usize = 10;

/// Opaque region/district search-code pair for one jurisdiction.
///
/// Consumed from the jurisdiction registry; never validated or mutated
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub region: String,
    pub district: String,
}

/// The first matching entry of a search-result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdinanceSummary {
    pub title: String,
    pub updated: String,
    pub department: String,
    pub page_params: (String, String),
}

/// Build the percent-encoded search URL for one jurisdiction and keyword.
pub fn search_url(params: &SearchParams, keyword: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("ctpvCd", &params.region)
        .append_pair("sggCd", &params.district)
        .append_pair("curPage", "1")
        .append_pair("category", "LAW")
        .append_pair("srchKwd", keyword)
        .finish();
    format!("{}?{}", SEARCH_ENDPOINT, query)
}

/// Build the regulation page URL from an extracted parameter pair.
pub fn page_url(params: &(String, String)) -> String {
    format!(
        "{}?alrNo={}&histNo={}&menuNm=main",
        PAGE_ENDPOINT, params.0, params.1
    )
}

/// Read the first result entry off a fetched search-result page.
///
/// Returns `None` when the page has no result list, when a field is
/// missing, or when the entry's title does not contain every whitespace
/// token of the keyword; similar-search hits for a different regulation
/// are discarded, not reported as errors.
pub fn parse_search_result(page: &Fragment, keyword: &str) -> Option<OrdinanceSummary> {
    let results = page.find_by_class("search-result-list")?;

    let title = results.find_all("strong").into_iter().next()?.text();
    let title = title.trim().to_string();
    if keyword
        .split_whitespace()
        .any(|token| !title.contains(token))
    {
        return None;
    }

    // Entry info line: "<region> <district> <revision-date> <department…>".
    let info = results.find_all("span").into_iter().next()?.text();
    let parts: Vec<&str> = info.split_whitespace().collect();
    let updated = parts.get(2)?.to_string();
    let department = parts.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();

    let handler = results
        .find_all("a")
        .into_iter()
        .find_map(|anchor| anchor.attribute("onclick"))?;
    let page_params = page_params(&handler)?;

    Some(OrdinanceSummary {
        title,
        updated,
        department,
        page_params,
    })
}

/// Cut the page-parameter pair out of a result entry's click-handler
/// string, e.g. `fnDetailPops('12345', '6');` → `("12345", "6")`.
pub fn page_params(handler: &str) -> Option<(String, String)> {
    let first_start = handler.find("s('")? + "s('".len();
    let first_len = handler[first_start..].find("', ")?;
    let first = &handler[first_start..first_start + first_len];

    let second_start = handler.find("', '")? + "', '".len();
    let second_end = handler.find("');")?;
    if second_end < second_start {
        return None;
    }
    let second = &handler[second_start..second_end];

    Some((first.to_string(), second.to_string()))
}

/// Number of search pages needed for a total-result count text.
///
/// Tolerates thousands separators; `None` when the text is not a count.
pub fn total_pages(count_text: &str) -> Option<usize> {
    let total: usize = count_text.trim().replace(',', "").parse().ok()?;
    Some(total.div_ceil(RESULTS_PER_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_markup;

    const RESULT_PAGE: &str = concat!(
        "<div id=\"container\"><div class=\"inner\">",
        "<div class=\"search-result-list\"><div>",
        "<a><strong> 구미시 공용차량 공유 조례 </strong>",
        "<span>경상북도 구미시 2024.12.01 차량관리과</span></a>",
        "<div><a onclick=\"fnDetailPops('48291', '3');\">상세</a></div>",
        "</div></div></div></div>",
    );

    #[test]
    fn parses_first_result_entry() {
        let page = parse_markup(RESULT_PAGE);
        let summary = parse_search_result(&page, "공용차량 공유").expect("summary");
        assert_eq!(summary.title, "구미시 공용차량 공유 조례");
        assert_eq!(summary.updated, "2024.12.01");
        assert_eq!(summary.department, "차량관리과");
        assert_eq!(summary.page_params, ("48291".to_string(), "3".to_string()));
    }

    #[test]
    fn rejects_title_missing_a_keyword_token() {
        let page = parse_markup(RESULT_PAGE);
        assert!(parse_search_result(&page, "공용차량 실종자").is_none());
    }

    #[test]
    fn missing_result_list_is_none() {
        let page = parse_markup("<div id=\"container\"><p>검색 결과가 없습니다.</p></div>");
        assert!(parse_search_result(&page, "공용차량").is_none());
    }

    #[test]
    fn cuts_handler_parameters() {
        assert_eq!(
            page_params("javascript:goDetails('100', '2');"),
            Some(("100".to_string(), "2".to_string()))
        );
        assert_eq!(page_params("javascript:void(0)"), None);
    }

    #[test]
    fn builds_encoded_search_url() {
        let params = SearchParams {
            region: "47".to_string(),
            district: "920".to_string(),
        };
        let url = search_url(&params, "실종자 수색");
        assert!(url.starts_with(SEARCH_ENDPOINT));
        assert!(url.contains("ctpvCd=47"));
        assert!(url.contains("sggCd=920"));
        assert!(url.contains("category=LAW"));
        // Keyword is form-encoded: space becomes '+', Hangul percent-escaped.
        assert!(url.contains('+'));
        assert!(!url.contains(' '));
    }

    #[test]
    fn builds_page_url() {
        let url = page_url(&("48291".to_string(), "3".to_string()));
        assert_eq!(
            url,
            "https://www.elis.go.kr/allalr/selectAlrBdtOne?alrNo=48291&histNo=3&menuNm=main"
        );
    }

    #[test]
    fn page_counts_round_up() {
        assert_eq!(total_pages("10"), Some(1));
        assert_eq!(total_pages("11"), Some(2));
        assert_eq!(total_pages("1,234"), Some(124));
        assert_eq!(total_pages("없음"), None);
    }
}
