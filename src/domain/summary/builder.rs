//! Builds the advert summary by merging answers into the definition tree.
//!
//! Traversal follows schema order; the response tree only contributes
//! answers. A question with no matching response node at any level simply
//! has no answer.

use crate::domain::definition::{AdvertDefinition, DefinitionQuestion};
use crate::domain::foundation::{AdvertId, AdvertStatus, LookupError};
use crate::domain::formatting::format_compact_pounds;
use crate::domain::response::{AdvertResponse, QuestionResponse};

use super::view::{AdvertSummary, SummaryPage, SummaryQuestion, SummarySection};

/// Produces the full summary projection for one advert.
pub fn build_summary(
    definition: &AdvertDefinition,
    id: AdvertId,
    advert_name: &str,
    status: AdvertStatus,
    response: Option<&AdvertResponse>,
) -> Result<AdvertSummary, LookupError> {
    let sections = definition
        .sections
        .iter()
        .map(|section| {
            let section_response = match response {
                Some(response) => response.find_section(&section.id)?,
                None => None,
            };

            let pages = section
                .pages
                .iter()
                .map(|page| {
                    let page_response = match section_response {
                        Some(section_response) => section_response.find_page(&page.id)?,
                        None => None,
                    };

                    let questions = page
                        .questions
                        .iter()
                        .map(|question| {
                            let question_response = match page_response {
                                Some(page_response) => {
                                    page_response.find_question(&question.id)?
                                }
                                None => None,
                            };
                            Ok(summarize_question(question, question_response))
                        })
                        .collect::<Result<Vec<_>, LookupError>>()?;

                    Ok(SummaryPage {
                        id: page.id.clone(),
                        title: page.title.clone(),
                        questions,
                    })
                })
                .collect::<Result<Vec<_>, LookupError>>()?;

            Ok(SummarySection {
                id: section.id.clone(),
                title: section.title.clone(),
                pages,
            })
        })
        .collect::<Result<Vec<_>, LookupError>>()?;

    Ok(AdvertSummary {
        id,
        advert_name: advert_name.to_string(),
        status,
        sections,
    })
}

fn summarize_question(
    question: &DefinitionQuestion,
    response: Option<&QuestionResponse>,
) -> SummaryQuestion {
    let rendered = response.and_then(|r| {
        if question.response_type.is_currency() {
            // A malformed amount fails this field's rendering, not the view.
            r.response
                .as_deref()
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .map(format_compact_pounds)
        } else {
            r.response.clone()
        }
    });

    SummaryQuestion {
        id: question.id.clone(),
        title: question
            .summary_title
            .clone()
            .unwrap_or_else(|| question.title.clone()),
        suffix_text: question.summary_suffix_text.clone(),
        response_type: question.response_type,
        response: rendered,
        multi_response: response.and_then(|r| r.multi_response.clone()),
    }
}
