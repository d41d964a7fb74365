//! Builds the public preview from a fixed set of well-known questions.
//!
//! Unlike the summary, this projection does not traverse the schema: it
//! addresses the handful of questions the public page is built from
//! directly, and treats anything missing as an empty field. Every field
//! resolves independently so a half-finished advert previews whatever is
//! there.

use crate::domain::foundation::LookupError;
use crate::domain::formatting::assemble_date_time;
use crate::domain::response::{AdvertResponse, QuestionResponse};

use super::view::{AdvertPreview, PreviewTab};

const GRANT_DETAILS_SECTION: &str = "grantDetails";
const SHORT_DESCRIPTION_PAGE: &str = "1";
const SHORT_DESCRIPTION_QUESTION: &str = "grantShortDescription";

const APPLICATION_DATES_SECTION: &str = "applicationDates";
const APPLICATION_DATES_PAGE: &str = "1";
const OPENING_DATE_QUESTION: &str = "grantApplicationOpenDate";
const CLOSING_DATE_QUESTION: &str = "grantApplicationCloseDate";

/// Section holding the six rich-text tab questions. Each tab question sits
/// on a page of the same id.
const FURTHER_INFORMATION_SECTION: &str = "furtherInformation";

/// Tab display name and the question that holds its body.
const PREVIEW_TABS: [(&str, &str); 6] = [
    ("Summary", "grantSummaryTab"),
    ("Eligibility", "grantEligibilityTab"),
    ("Objectives", "grantObjectivesTab"),
    ("Dates", "grantDatesTab"),
    ("How to apply", "grantApplyTab"),
    ("Supporting information", "grantSupportingInfoTab"),
];

/// Index into a tab question's multi-response holding the rich-text body
/// (index 0 carries the editor's internal state).
const RICH_TEXT_BODY_INDEX: usize = 1;

/// Produces the public preview for one advert.
///
/// An advert with no response at all previews as its name plus empty
/// fields. Ambiguous ids are still integrity errors.
pub fn build_preview(
    advert_name: &str,
    response: Option<&AdvertResponse>,
) -> Result<AdvertPreview, LookupError> {
    let Some(response) = response else {
        return Ok(empty_preview(advert_name));
    };

    let short_description = question_response(
        response,
        GRANT_DETAILS_SECTION,
        SHORT_DESCRIPTION_PAGE,
        SHORT_DESCRIPTION_QUESTION,
    )?
    .and_then(|q| q.response.clone())
    .unwrap_or_default();

    let opening_date = formatted_date(response, OPENING_DATE_QUESTION)?;
    let closing_date = formatted_date(response, CLOSING_DATE_QUESTION)?;

    let tabs = PREVIEW_TABS
        .iter()
        .map(|(name, question_id)| {
            let content = question_response(
                response,
                FURTHER_INFORMATION_SECTION,
                question_id,
                question_id,
            )?
            .and_then(|q| q.multi_response.as_ref())
            .and_then(|m| m.get(RICH_TEXT_BODY_INDEX))
            .cloned()
            .unwrap_or_default();

            Ok(PreviewTab {
                name: name.to_string(),
                content,
            })
        })
        .collect::<Result<Vec<_>, LookupError>>()?;

    Ok(AdvertPreview {
        advert_name: advert_name.to_string(),
        short_description,
        opening_date,
        closing_date,
        tabs,
    })
}

fn empty_preview(advert_name: &str) -> AdvertPreview {
    AdvertPreview {
        advert_name: advert_name.to_string(),
        short_description: String::new(),
        opening_date: String::new(),
        closing_date: String::new(),
        tabs: PREVIEW_TABS
            .iter()
            .map(|(name, _)| PreviewTab {
                name: name.to_string(),
                content: String::new(),
            })
            .collect(),
    }
}

fn formatted_date(response: &AdvertResponse, question_id: &str) -> Result<String, LookupError> {
    Ok(question_response(
        response,
        APPLICATION_DATES_SECTION,
        APPLICATION_DATES_PAGE,
        question_id,
    )?
    .and_then(|q| q.multi_response.as_deref())
    .and_then(assemble_date_time)
    .unwrap_or_default())
}

/// Resolves one well-known question, treating a miss at any level as
/// absence rather than an error.
fn question_response<'a>(
    response: &'a AdvertResponse,
    section_id: &str,
    page_id: &str,
    question_id: &str,
) -> Result<Option<&'a QuestionResponse>, LookupError> {
    let Some(section) = response.find_section(section_id)? else {
        return Ok(None);
    };
    let Some(page) = section.find_page(page_id)? else {
        return Ok(None);
    };
    page.find_question(question_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PageStatus, SectionStatus};
    use crate::domain::response::{PageResponse, SectionResponse};

    fn rich_text_question(id: &str, body: &str) -> QuestionResponse {
        QuestionResponse {
            id: id.to_string(),
            seen: true,
            response: None,
            multi_response: Some(vec!["{}".to_string(), body.to_string()]),
        }
    }

    fn tab_page(question_id: &str, body: &str) -> PageResponse {
        PageResponse {
            id: question_id.to_string(),
            status: PageStatus::Completed,
            questions: vec![rich_text_question(question_id, body)],
        }
    }

    fn tab_content<'a>(preview: &'a AdvertPreview, name: &str) -> &'a str {
        &preview
            .tabs
            .iter()
            .find(|t| t.name == name)
            .unwrap()
            .content
    }

    #[test]
    fn empty_advert_previews_name_only() {
        let preview = build_preview("Chargepoint Grant", None).unwrap();

        assert_eq!(preview.advert_name, "Chargepoint Grant");
        assert_eq!(preview.short_description, "");
        assert_eq!(preview.opening_date, "");
        assert_eq!(preview.closing_date, "");
        assert_eq!(preview.tabs.len(), 6);
        assert!(preview.tabs.iter().all(|t| t.content.is_empty()));

        let names: Vec<&str> = preview.tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Summary",
                "Eligibility",
                "Objectives",
                "Dates",
                "How to apply",
                "Supporting information"
            ]
        );
    }

    #[test]
    fn partially_complete_advert_fills_present_fields_only() {
        // Two tabs answered, no applicationDates section at all.
        let response = AdvertResponse {
            sections: vec![SectionResponse {
                id: FURTHER_INFORMATION_SECTION.to_string(),
                status: SectionStatus::InProgress,
                pages: vec![
                    tab_page("grantSummaryTab", "<p>About this grant</p>"),
                    tab_page("grantEligibilityTab", "<p>Who can apply</p>"),
                ],
            }],
        };

        let preview = build_preview("Chargepoint Grant", Some(&response)).unwrap();

        assert_eq!(
            tab_content(&preview, "Summary"),
            "<p>About this grant</p>"
        );
        assert_eq!(
            tab_content(&preview, "Eligibility"),
            "<p>Who can apply</p>"
        );
        // One missing field must not blank out siblings.
        assert_eq!(tab_content(&preview, "Objectives"), "");
        assert_eq!(tab_content(&preview, "How to apply"), "");
        assert_eq!(preview.opening_date, "");
        assert_eq!(preview.closing_date, "");
    }

    #[test]
    fn dates_assemble_from_components() {
        let response = AdvertResponse {
            sections: vec![SectionResponse {
                id: APPLICATION_DATES_SECTION.to_string(),
                status: SectionStatus::Completed,
                pages: vec![PageResponse {
                    id: APPLICATION_DATES_PAGE.to_string(),
                    status: PageStatus::Completed,
                    questions: vec![
                        QuestionResponse {
                            id: OPENING_DATE_QUESTION.to_string(),
                            seen: true,
                            response: None,
                            multi_response: Some(
                                ["10", "12", "2022", "0", "1"]
                                    .iter()
                                    .map(|s| s.to_string())
                                    .collect(),
                            ),
                        },
                        QuestionResponse {
                            id: CLOSING_DATE_QUESTION.to_string(),
                            seen: true,
                            response: None,
                            multi_response: None,
                        },
                    ],
                }],
            }],
        };

        let preview = build_preview("Chargepoint Grant", Some(&response)).unwrap();

        assert_eq!(preview.opening_date, "10 December 2022, 12:01am");
        // Closing date unanswered: independent of its sibling.
        assert_eq!(preview.closing_date, "");
    }

    #[test]
    fn short_description_reads_single_value_answer() {
        let response = AdvertResponse {
            sections: vec![SectionResponse {
                id: GRANT_DETAILS_SECTION.to_string(),
                status: SectionStatus::InProgress,
                pages: vec![PageResponse {
                    id: SHORT_DESCRIPTION_PAGE.to_string(),
                    status: PageStatus::Completed,
                    questions: vec![QuestionResponse {
                        id: SHORT_DESCRIPTION_QUESTION.to_string(),
                        seen: true,
                        response: Some("Funding for rural chargepoints".to_string()),
                        multi_response: None,
                    }],
                }],
            }],
        };

        let preview = build_preview("Chargepoint Grant", Some(&response)).unwrap();
        assert_eq!(preview.short_description, "Funding for rural chargepoints");
    }

    #[test]
    fn tab_with_short_multi_response_renders_empty() {
        let response = AdvertResponse {
            sections: vec![SectionResponse {
                id: FURTHER_INFORMATION_SECTION.to_string(),
                status: SectionStatus::InProgress,
                pages: vec![PageResponse {
                    id: "grantSummaryTab".to_string(),
                    status: PageStatus::InProgress,
                    questions: vec![QuestionResponse {
                        id: "grantSummaryTab".to_string(),
                        seen: true,
                        response: None,
                        multi_response: Some(vec!["{}".to_string()]),
                    }],
                }],
            }],
        };

        let preview = build_preview("Chargepoint Grant", Some(&response)).unwrap();
        assert_eq!(tab_content(&preview, "Summary"), "");
    }

    #[test]
    fn duplicate_well_known_id_is_an_integrity_error() {
        let response = AdvertResponse {
            sections: vec![
                SectionResponse {
                    id: GRANT_DETAILS_SECTION.to_string(),
                    status: SectionStatus::InProgress,
                    pages: vec![],
                },
                SectionResponse {
                    id: GRANT_DETAILS_SECTION.to_string(),
                    status: SectionStatus::InProgress,
                    pages: vec![],
                },
            ],
        };

        let err = build_preview("Chargepoint Grant", Some(&response)).unwrap_err();
        assert!(err.is_ambiguous());
    }
}
