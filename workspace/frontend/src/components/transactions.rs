use momo_dashboard::{TransactionQuery, TransactionRow, TypeCatalog};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct FilterControlsProps {
    pub query: TransactionQuery,
    pub on_change: Callback<TransactionQuery>,
}

/// Type selector plus free-text search; every edit emits the full query.
#[function_component(FilterControls)]
pub fn filter_controls(props: &FilterControlsProps) -> Html {
    let options = TypeCatalog::new().list_filter_options();

    let on_type = {
        let query = props.query.clone();
        props.on_change.reform(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            TransactionQuery::new(select.value(), query.search.clone())
        })
    };

    let on_search = {
        let query = props.query.clone();
        props.on_change.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            TransactionQuery::new(query.type_code.clone(), input.value())
        })
    };

    html! {
        <div class="flex flex-col md:flex-row gap-2">
            <select class="select select-bordered select-sm" onchange={on_type}>
                {for options.into_iter().map(|(code, label)| html! {
                    <option value={code} selected={code == props.query.type_code}>{label}</option>
                })}
            </select>
            <input
                type="text"
                class="input input-bordered input-sm"
                placeholder="Search transactions..."
                value={props.query.search.clone()}
                oninput={on_search}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Option<Vec<TransactionRow>>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let Some(rows) = &props.rows else {
        return html! { <Loading text={"Loading transactions..."} /> };
    };

    if rows.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-inbox text-4xl mb-4 opacity-50"></i>
                <p>{"No transactions found."}</p>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Description"}</th>
                        <th>{"Type"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Date"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|row| html! {
                        <tr key={row.key.clone()}>
                            <td>{&row.description}</td>
                            <td>
                                <div class="flex items-center gap-2">
                                    <span
                                        class="w-7 h-7 rounded-full flex items-center justify-center text-white"
                                        style={format!("background-color: {}", row.type_info.color_token)}
                                    >
                                        <i class={row.type_info.icon_tag}></i>
                                    </span>
                                    <span>{&row.type_info.display_name}</span>
                                </div>
                            </td>
                            <td class="font-semibold">{&row.amount_text}</td>
                            <td>{&row.date_text}</td>
                            <td><span class="badge badge-success badge-sm">{row.status}</span></td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
