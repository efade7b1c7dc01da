use crate::form::FormState;
use crate::render::{RenderedForm, RenderedInput};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// ### ContactForm Component
/// Four labelled inputs validated on every keystroke and again on submit.
/// Once a submit is accepted, the captured values are echoed back underneath.
///
/// Everything shown is read from a `RenderedForm` memo of the form state.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let rendered = Memo::new(move |_| form.with(|form| RenderedForm::from(form)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|form| {
            form.submit();
        });
    };

    // the set of inputs never changes, only their values and errors
    let inputs = rendered.with_untracked(|view| view.inputs.clone());

    view! {
        <div class="contact-form">
            <h1>{move || rendered.with(|view| view.heading)}</h1>
            // rules are ours, keep the browser's constraint checks out of the way
            <form novalidate on:submit=on_submit>
                {inputs
                    .into_iter()
                    .map(|input| view! { <FieldInput input=input rendered=rendered form=form /> })
                    .collect_view()}
                <button type="submit">{move || rendered.with(|view| view.button)}</button>
            </form>
            {move || {
                rendered
                    .with(RenderedForm::summary_text)
                    .map(|text| view! { <pre class="summary">{text}</pre> })
            }}
        </div>
    }
}

/// One label, its input and the error line under it.
///
/// ### Parameters
/// `input`: the rendered input this control stands for; its `field` receives the typed text
///
/// `rendered`: projection the value and error are read from
///
/// `form`: the shared form state
#[component]
fn FieldInput(
    input: RenderedInput,
    rendered: Memo<RenderedForm>,
    form: RwSignal<FormState>,
) -> impl IntoView {
    let field = input.field;
    let value = move || {
        rendered.with(|view| {
            view.input(field)
                .map(|input| input.value.clone())
                .unwrap_or_default()
        })
    };
    let error = move || rendered.with(|view| view.error_for(field).map(str::to_string));

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=input.id
                name=input.id
                prop:value=value
                on:input=move |ev| form.update(|form| form.input(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id=input.id
                name=input.id
                prop:value=value
                on:input=move |ev| form.update(|form| form.input(field, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label for=input.id>{input.label}</label>
            {control}
            {move || error().map(|message| view! { <p class="error">{message}</p> })}
        </div>
    }
}
