//! Filter-expression construction for the Algolia filter grammar.
//!
//! The builders translate a host search condition into a single filter
//! string: a conjunction of independently built clauses, where each tag
//! group is itself a parenthesized disjunction. Clause order follows
//! input order. This is pure string construction; no input is rejected.

use plugin_shared::{AcceptedCond, SearchCondition};

/// Leading clause on every filter: exclude soft-deleted/hidden content.
pub const STATUS_VISIBLE: &str = "status<10";

/// An Algolia filter string accumulated clause by clause.
#[derive(Debug, Clone)]
pub struct FilterExpression {
    buf: String,
}

impl FilterExpression {
    /// Start a filter with its fixed leading clause.
    pub fn new(root: impl Into<String>) -> Self {
        Self { buf: root.into() }
    }

    /// Conjoin a clause with ` AND `.
    pub fn and(&mut self, clause: &str) -> &mut Self {
        self.buf.push_str(" AND ");
        self.buf.push_str(clause);
        self
    }

    /// Append a clause with no separator.
    ///
    /// The answer-scoping clause is appended this way to match the
    /// established filter contract; see `build_answer_filter`.
    pub fn append_unjoined(&mut self, clause: &str) -> &mut Self {
        self.buf.push_str(clause);
        self
    }

    /// The accumulated filter string.
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Conjoin one parenthesized OR clause per non-empty tag group,
/// preserving group input order.
fn and_tag_groups(expr: &mut FilterExpression, tag_ids: &[Vec<String>]) {
    for group in tag_ids {
        if group.is_empty() {
            continue;
        }
        let terms: Vec<String> = group.iter().map(|id| format!("tags:{id}")).collect();
        expr.and(&format!("({})", terms.join(" OR ")));
    }
}

/// Build the filter for a search across all content types.
///
/// The vote threshold uses the 0-is-equality policy: `0` emits
/// `votes=0`, positive values emit `votes>=n`, and the `-1` sentinel
/// emits nothing.
pub fn build_content_filter(cond: &SearchCondition) -> String {
    let mut expr = FilterExpression::new(STATUS_VISIBLE);
    and_tag_groups(&mut expr, &cond.tag_ids);

    if !cond.user_id.is_empty() {
        expr.and(&format!("userID:{}", cond.user_id));
    }

    if cond.vote_amount == 0 {
        expr.and("votes=0");
    } else if cond.vote_amount > 0 {
        expr.and(&format!("votes>={}", cond.vote_amount));
    }

    expr.into_string()
}

/// Build the filter for a question-only search.
///
/// Views use a greater-or-equal policy for any non-sentinel value
/// (so `0` emits `views>=0`), while answers use the 0-is-equality
/// policy. The acceptance flag emits a clause only for the explicit
/// "unaccepted" condition.
pub fn build_question_filter(cond: &SearchCondition) -> String {
    let mut expr = FilterExpression::new(format!("{STATUS_VISIBLE} AND type:question"));
    and_tag_groups(&mut expr, &cond.tag_ids);

    if cond.question_accepted == AcceptedCond::NotAccepted {
        expr.and("hasAccepted:false");
    }

    if cond.view_amount > -1 {
        expr.and(&format!("views>={}", cond.view_amount));
    }

    if cond.answer_amount == 0 {
        expr.and("answers=0");
    } else if cond.answer_amount > 0 {
        expr.and(&format!("answers>={}", cond.answer_amount));
    }

    expr.into_string()
}

/// Build the filter for an answer-only search.
///
/// The acceptance flag emits a clause only for the explicit "accepted"
/// condition, using the `=` operator (the question path uses `:`). The
/// parent-question scoping clause is appended without an `AND`
/// separator; both shapes are part of the established filter contract
/// and are pinned by tests.
pub fn build_answer_filter(cond: &SearchCondition) -> String {
    let mut expr = FilterExpression::new(format!("{STATUS_VISIBLE} AND type:answer"));
    and_tag_groups(&mut expr, &cond.tag_ids);

    if cond.answer_accepted == AcceptedCond::Accepted {
        expr.and("hasAccepted=true");
    }

    if !cond.question_id.is_empty() {
        expr.append_unjoined(&format!("questionID={}", cond.question_id));
    }

    expr.into_string()
}

/// Join the condition's words into the free-text query string.
///
/// An empty word list yields an empty query, which matches everything
/// the filters allow.
pub fn query_text(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(groups: &[&[&str]]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_condition_is_status_clause_only() {
        let cond = SearchCondition::default();
        assert_eq!(build_content_filter(&cond), "status<10");
        assert_eq!(query_text(&cond.words), "");
    }

    #[test]
    fn test_tag_groups_or_within_and_between_in_order() {
        let cond = SearchCondition {
            tag_ids: groups(&[&["t1", "t2"], &["t3"]]),
            ..Default::default()
        };
        assert_eq!(
            build_content_filter(&cond),
            "status<10 AND (tags:t1 OR tags:t2) AND (tags:t3)"
        );
    }

    #[test]
    fn test_empty_tag_group_emits_nothing() {
        let cond = SearchCondition {
            tag_ids: groups(&[&[], &["t1"]]),
            ..Default::default()
        };
        assert_eq!(build_content_filter(&cond), "status<10 AND (tags:t1)");
    }

    #[test]
    fn test_user_id_clause() {
        let cond = SearchCondition {
            user_id: "u42".to_string(),
            ..Default::default()
        };
        assert_eq!(build_content_filter(&cond), "status<10 AND userID:u42");
    }

    #[test]
    fn test_votes_zero_is_equality() {
        let cond = SearchCondition {
            vote_amount: 0,
            ..Default::default()
        };
        assert_eq!(build_content_filter(&cond), "status<10 AND votes=0");
    }

    #[test]
    fn test_votes_positive_is_threshold() {
        let cond = SearchCondition {
            vote_amount: 5,
            ..Default::default()
        };
        assert_eq!(build_content_filter(&cond), "status<10 AND votes>=5");
    }

    #[test]
    fn test_votes_sentinel_is_absent() {
        let cond = SearchCondition {
            vote_amount: -1,
            ..Default::default()
        };
        assert!(!build_content_filter(&cond).contains("votes"));
    }

    #[test]
    fn test_question_filter_base() {
        let cond = SearchCondition::default();
        assert_eq!(build_question_filter(&cond), "status<10 AND type:question");
    }

    #[test]
    fn test_question_unaccepted_flag() {
        let cond = SearchCondition {
            question_accepted: AcceptedCond::NotAccepted,
            ..Default::default()
        };
        assert_eq!(
            build_question_filter(&cond),
            "status<10 AND type:question AND hasAccepted:false"
        );
    }

    #[test]
    fn test_question_accepted_any_adds_no_clause() {
        let cond = SearchCondition {
            question_accepted: AcceptedCond::Accepted,
            ..Default::default()
        };
        // Only the explicit "unaccepted" condition emits a clause.
        assert!(!build_question_filter(&cond).contains("hasAccepted"));
    }

    #[test]
    fn test_views_zero_is_threshold_not_equality() {
        let cond = SearchCondition {
            view_amount: 0,
            ..Default::default()
        };
        assert_eq!(
            build_question_filter(&cond),
            "status<10 AND type:question AND views>=0"
        );
    }

    #[test]
    fn test_answers_policy() {
        let zero = SearchCondition {
            answer_amount: 0,
            ..Default::default()
        };
        assert!(build_question_filter(&zero).ends_with(" AND answers=0"));

        let three = SearchCondition {
            answer_amount: 3,
            ..Default::default()
        };
        assert!(build_question_filter(&three).ends_with(" AND answers>=3"));

        let unset = SearchCondition::default();
        assert!(!build_question_filter(&unset).contains("answers"));
    }

    #[test]
    fn test_answer_accepted_flag_uses_equals() {
        let cond = SearchCondition {
            answer_accepted: AcceptedCond::Accepted,
            ..Default::default()
        };
        assert_eq!(
            build_answer_filter(&cond),
            "status<10 AND type:answer AND hasAccepted=true"
        );
    }

    #[test]
    fn test_answer_not_accepted_adds_no_clause() {
        let cond = SearchCondition {
            answer_accepted: AcceptedCond::NotAccepted,
            ..Default::default()
        };
        assert_eq!(build_answer_filter(&cond), "status<10 AND type:answer");
    }

    // Pins the scoping clause being appended without an AND separator.
    #[test]
    fn test_answer_question_scope_appended_unjoined() {
        let cond = SearchCondition {
            question_id: "q7".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_answer_filter(&cond),
            "status<10 AND type:answerquestionID=q7"
        );
    }

    #[test]
    fn test_query_text_joins_and_trims() {
        let words = vec!["rust".to_string(), "async".to_string()];
        assert_eq!(query_text(&words), "rust async");
        assert_eq!(query_text(&[]), "");
    }

    #[test]
    fn test_clause_order_tags_then_user_then_votes() {
        let cond = SearchCondition {
            tag_ids: groups(&[&["t1"]]),
            user_id: "u1".to_string(),
            vote_amount: 2,
            ..Default::default()
        };
        assert_eq!(
            build_content_filter(&cond),
            "status<10 AND (tags:t1) AND userID:u1 AND votes>=2"
        );
    }
}
