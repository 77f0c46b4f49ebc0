//! Request Table Component
//!
//! One table layout for every request kind. Callers pick the middle columns;
//! the id, status and action columns are always present.

use intake_domain::RequestKind;
use leptos::prelude::*;

use super::{EmptyState, StatusBadge};

/// Row key: position plus id. Ids are not unique, but lists only grow, so a
/// record keeps its position.
type RowKey = (usize, String);

fn keyed_rows<K: RequestKind>(records: Vec<K>) -> Vec<(RowKey, K)> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| ((index, record.id().to_string()), record))
        .collect()
}

#[component]
pub fn RequestTable<K>(
    records: Signal<Vec<K>>,
    /// Headers for the kind-specific columns
    columns: &'static [&'static str],
    /// Cell text for the kind-specific columns, in `columns` order
    cells: fn(&K) -> Vec<String>,
    #[prop(into)] on_view: Callback<K>,
    empty_title: &'static str,
    empty_message: &'static str,
    #[prop(optional)] new_label: Option<&'static str>,
    #[prop(optional, into)] on_new: Option<Callback<()>>,
) -> impl IntoView
where
    K: RequestKind + Send + Sync,
{
    move || {
        if records.with(Vec::is_empty) {
            return match new_label.zip(on_new) {
                Some((label, on_new)) => view! {
                    <EmptyState
                        title=empty_title
                        message=empty_message
                        action_label=label
                        on_action=on_new
                    />
                }
                .into_any(),
                None => view! { <EmptyState title=empty_title message=empty_message /> }.into_any(),
            };
        }

        view! {
            <div class="table-wrap">
                <table class="request-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            {columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                            <th>"Status"</th>
                            <th class="actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || keyed_rows(records.get())
                            key=|(key, _)| key.clone()
                            children=move |(_, record)| {
                                let status = record.status();
                                let id = record.id().to_string();
                                let row = cells(&record);
                                view! {
                                    <tr>
                                        <td class="record-id">{id}</td>
                                        {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                        <td><StatusBadge status=status /></td>
                                        <td class="actions">
                                            <button
                                                type="button"
                                                class="btn btn-ghost"
                                                on:click=move |_| on_view.run(record.clone())
                                            >
                                                "View Details"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_domain::{DesignRequest, DesignRequestForm, IntakeForm, Submission};

    fn design_request(millis: i64) -> DesignRequest {
        let form = DesignRequestForm {
            contact_name: "Dana Reyes".into(),
            email: "dana@store.com".into(),
            request_type: "Flyer".into(),
            description: "Fall flavor flyer".into(),
            ..DesignRequestForm::for_store("1234", "Downtown LA")
        };
        let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        form.submit(&Submission::new(millis, today)).unwrap()
    }

    #[test]
    fn test_repeated_ids_get_distinct_row_keys() {
        // Same last six digits, so the same id
        let first = design_request(1_760_000_654_321);
        let second = design_request(1_761_000_654_321);
        assert_eq!(first.id, second.id);

        let rows = keyed_rows(vec![first, second]);
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].0, rows[1].0);
        assert_eq!(rows[1].0, (1, "REQ-654321".to_string()));
    }
}
