use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProcessButtonProps {
    pub processing: bool,
    pub onclick: Callback<()>,
}

#[function_component(ProcessButton)]
pub fn process_button(props: &ProcessButtonProps) -> Html {
    let onclick = props.onclick.reform(|_: MouseEvent| ());

    html! {
        <button class="btn btn-primary" disabled={props.processing} {onclick}>
            {if props.processing {
                html! { <><i class="fas fa-spinner fa-spin"></i>{" Processing..."}</> }
            } else {
                html! { <><i class="fas fa-sync-alt"></i>{" Process Data"}</> }
            }}
        </button>
    }
}
