//! Transactions page: full CRUD with filters and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns list/query state and the create-edit modal; the backend
//! categorises and fraud-scores every write before returning the stored row,
//! so the list is refetched after each mutation rather than patched locally.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::types::{Transaction, TransactionCreate, TransactionUpdate};
use crate::util::format::{format_currency, format_date};

/// Rows per page, matching the original client.
const PAGE_SIZE: u64 = 15;

/// Categories the user can pick; a blank selection defers to the backend
/// auto-categoriser.
pub const CATEGORIES: [&str; 9] = [
    "Food & Groceries",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Shopping",
    "Housing",
    "Education",
    "Income",
];

fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 { 0 } else { total.div_ceil(limit) }
}

/// Positive finite dollar amount from form input.
#[cfg(any(test, feature = "hydrate"))]
fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Trimmed form value; blank reads as absent.
#[cfg(any(test, feature = "hydrate"))]
fn optional_field(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Tri-state flagged filter from the `<select>` value.
#[cfg(any(test, feature = "hydrate"))]
fn flagged_filter(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn build_create_payload(
    amount_raw: &str,
    description: &str,
    category: &str,
    note: &str,
) -> Result<TransactionCreate, &'static str> {
    let amount = parse_amount(amount_raw).ok_or("Enter an amount above zero.")?;
    let description = optional_field(description).ok_or("Enter a description.")?;
    Ok(TransactionCreate {
        amount,
        description,
        category: optional_field(category),
        note: optional_field(note),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn build_update_payload(
    amount_raw: &str,
    description: &str,
    category: &str,
    note: &str,
) -> Result<TransactionUpdate, &'static str> {
    let amount = parse_amount(amount_raw).ok_or("Enter an amount above zero.")?;
    let description = optional_field(description).ok_or("Enter a description.")?;
    Ok(TransactionUpdate {
        amount: Some(amount),
        description: Some(description),
        category: optional_field(category),
        note: optional_field(note),
    })
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<Transaction>::new());
    let total = RwSignal::new(0_u64);
    let page = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);
    let refresh = RwSignal::new(0_u32);

    let filter_category = RwSignal::new(String::new());
    let filter_flagged = RwSignal::new(String::new());

    // Modal state: `None` editing id means "create".
    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Transaction>);

    // Refetch whenever the page, either filter, or the refresh counter moves.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let page_value = page.get();
        let category_value = filter_category.get();
        let flagged_value = filter_flagged.get();
        let _ = refresh.get();

        loading.set(true);
        leptos::task::spawn_local(async move {
            let category = optional_field(&category_value);
            let result = crate::net::api::list_transactions(
                page_value * PAGE_SIZE,
                PAGE_SIZE,
                category.as_deref(),
                flagged_filter(&flagged_value),
            )
            .await;
            match result {
                Ok(data) => {
                    items.set(data.items);
                    total.set(data.total);
                }
                Err(e) => log::warn!("failed to load transactions: {e}"),
            }
            loading.set(false);
        });
    });

    let open_create = move |_| {
        editing.set(None);
        show_modal.set(true);
    };

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this transaction?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_transaction(&id).await {
                    Ok(()) => refresh.update(|n| *n += 1),
                    Err(e) => log::warn!("failed to delete transaction: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_modal_close = Callback::new(move |()| show_modal.set(false));

    view! {
        <div class="page page--transactions">
            <header class="page__header page__header--actions">
                <div>
                    <h2>"Transactions"</h2>
                    <p class="page__subtitle">
                        {move || format!("{} total transactions", total.get())}
                    </p>
                </div>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Add Transaction"
                </button>
            </header>

            <div class="filters">
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        filter_category.set(event_target_value(&ev));
                        page.set(0);
                    }
                >
                    <option value="">"All Categories"</option>
                    {CATEGORIES
                        .into_iter()
                        .map(|c| view! { <option value=c>{c}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        filter_flagged.set(event_target_value(&ev));
                        page.set(0);
                    }
                >
                    <option value="">"All Status"</option>
                    <option value="true">"Flagged Only"</option>
                    <option value="false">"Normal Only"</option>
                </select>
            </div>

            <Show when=move || !loading.get() fallback=move || view! { <Spinner class="spinner--page"/> }>
                <div class="panel panel--table">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Description"</th>
                                <th>"Category"</th>
                                <th class="table__num">"Amount"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|txn| {
                                        let edit_target = txn.clone();
                                        let delete_id = txn.id.clone();
                                        view! {
                                            <tr>
                                                <td>{format_date(&txn.created_at)}</td>
                                                <td class="table__desc">{txn.description.clone()}</td>
                                                <td>
                                                    <span class="badge">{txn.category.clone()}</span>
                                                </td>
                                                <td class="table__num">{format_currency(txn.amount)}</td>
                                                <td>
                                                    {
                                                        let (class, label) = if txn.is_flagged {
                                                            ("badge badge--flagged", "Flagged")
                                                        } else {
                                                            ("badge badge--normal", "Normal")
                                                        };
                                                        view! { <span class=class>{label}</span> }
                                                    }
                                                </td>
                                                <td class="table__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            editing.set(Some(edit_target.clone()));
                                                            show_modal.set(true);
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_delete(delete_id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            <Show when=move || items.get().is_empty()>
                                <tr>
                                    <td colspan="6" class="table__empty">
                                        "No transactions found"
                                    </td>
                                </tr>
                            </Show>
                        </tbody>
                    </table>

                    <Show when=move || (total_pages(total.get(), PAGE_SIZE) > 1)>
                        <div class="pagination">
                            <p class="pagination__status">
                                {move || {
                                    format!(
                                        "Page {} of {}",
                                        page.get() + 1,
                                        total_pages(total.get(), PAGE_SIZE),
                                    )
                                }}
                            </p>
                            <div class="pagination__actions">
                                <button
                                    class="btn btn--small"
                                    disabled=move || page.get() == 0
                                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                                >
                                    "Previous"
                                </button>
                                <button
                                    class="btn btn--small"
                                    disabled=move || page.get() + 1 >= total_pages(total.get(), PAGE_SIZE)
                                    on:click=move |_| page.update(|p| *p += 1)
                                >
                                    "Next"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </Show>

            <Show when=move || show_modal.get()>
                <TransactionDialog editing=editing on_close=on_modal_close refresh=refresh/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating or editing a transaction.
#[component]
fn TransactionDialog(
    editing: RwSignal<Option<Transaction>>,
    on_close: Callback<()>,
    refresh: RwSignal<u32>,
) -> impl IntoView {
    let existing = editing.get_untracked();
    let is_edit = existing.is_some();

    let amount = RwSignal::new(
        existing.as_ref().map(|t| t.amount.to_string()).unwrap_or_default(),
    );
    let description = RwSignal::new(
        existing.as_ref().map(|t| t.description.clone()).unwrap_or_default(),
    );
    let category = RwSignal::new(
        existing.as_ref().map(|t| t.category.clone()).unwrap_or_default(),
    );
    let note = RwSignal::new(
        existing.as_ref().and_then(|t| t.note.clone()).unwrap_or_default(),
    );
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let editing_id = existing.map(|t| t.id);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let id = editing_id.clone();
            let amount_value = amount.get();
            let description_value = description.get();
            let category_value = category.get();
            let note_value = note.get();

            if let Some(id) = id {
                let payload = match build_update_payload(
                    &amount_value,
                    &description_value,
                    &category_value,
                    &note_value,
                ) {
                    Ok(payload) => payload,
                    Err(message) => {
                        info.set(message.to_owned());
                        return;
                    }
                };
                busy.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_transaction(&id, &payload).await {
                        Ok(_) => {
                            refresh.update(|n| *n += 1);
                            on_close.run(());
                        }
                        Err(e) => {
                            info.set(format!("Update failed: {e}"));
                            busy.set(false);
                        }
                    }
                });
            } else {
                let payload = match build_create_payload(
                    &amount_value,
                    &description_value,
                    &category_value,
                    &note_value,
                ) {
                    Ok(payload) => payload,
                    Err(message) => {
                        info.set(message.to_owned());
                        return;
                    }
                };
                busy.set(true);
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_transaction(&payload).await {
                        Ok(_) => {
                            refresh.update(|n| *n += 1);
                            on_close.run(());
                        }
                        Err(e) => {
                            info.set(format!("Create failed: {e}"));
                            busy.set(false);
                        }
                    }
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (&editing_id, refresh);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Transaction" } else { "New Transaction" }}</h2>
                <label class="dialog__label">
                    "Amount ($)"
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.01"
                        min="0.01"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g., Grocery shopping at Walmart"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category (leave blank for AI auto-detect)"
                    <select
                        class="dialog__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"AI Auto-Detect"</option>
                        {CATEGORIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Note (encrypted)"
                    <textarea
                        class="dialog__input"
                        rows="2"
                        placeholder="Optional private note…"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="dialog__error">{move || info.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || {
                            if busy.get() { "Saving…" } else if is_edit { "Update" } else { "Create" }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
