//! Single-page checklist UI for WebAssembly targets.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::styles;
    use checklist_core::{
        Checklist, IntakeError, IntakeForm, IntakeModal, Insurance, Language, Recommendation,
        RecommendedAction, ScriptRequest, Status, SymptomId,
    };
    use checklist_gemini::{GeneratorConfig, ScriptEngine};
    use wasm_bindgen::prelude::*;
    use web_sys::{
        console, Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
        Window,
    };
    use yew::functional::use_force_update;
    use yew::platform::spawn_local;
    use yew::prelude::*;
    use yew::TargetCast;

    const SPECIALIST_URL: &str = "https://www.masseycancercenter.org/cancer-types-and-treatments/cancer-treatment-teams/colorectal-cancers/#meet-our-team";
    const CANCER_INFO_URL: &str =
        "https://www.masseycancercenter.org/cancer-types-and-treatments/cancer-types/anal-cancer/";

    const INFO_CARDS: [(&str, &str, &str); 3] = [
        (
            "🔗",
            "The Link",
            "HPV affects both the cervix and the anal canal. They are 'neighbors' sharing similar risks and biology.",
        ),
        (
            "🧬",
            "The 'Anal Pap'",
            "It's just a swab. Quick, gentle, and basically painless. Like a Pap smear, but for the back door.",
        ),
        (
            "🍑",
            "Prevention",
            "Anal cancer is highly treatable when caught early. Knowing your status is your power.",
        ),
    ];

    #[derive(Properties, PartialEq)]
    pub struct ChecklistAppProps {
        pub config: GeneratorConfig,
    }

    #[function_component(ChecklistApp)]
    fn checklist_app(props: &ChecklistAppProps) -> Html {
        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let checklist = use_state(Checklist::new);
        let modal = use_reducer(ModalState::default);

        let on_toggle = {
            let checklist = checklist.clone();
            Callback::from(move |id: SymptomId| {
                let mut next = (*checklist).clone();
                next.toggle(id);
                checklist.set(next);
            })
        };

        let on_reveal = {
            let checklist = checklist.clone();
            Callback::from(move |_| {
                let mut next = (*checklist).clone();
                next.reveal_result();
                checklist.set(next);
            })
        };

        let on_book = {
            let modal = modal.clone();
            let checklist = checklist.clone();
            Callback::from(move |_| {
                let labels = checklist.selected_labels().into_iter().map(str::to_string);
                modal.dispatch(ModalAction::Open(labels.collect()));
            })
        };

        let on_close = {
            let modal = modal.clone();
            Callback::from(move |_| modal.dispatch(ModalAction::Close))
        };

        let script_labels: Vec<String> = checklist
            .selected_labels()
            .into_iter()
            .map(str::to_string)
            .collect();

        html! {
            <main class="checklist-root">
                { render_hero() }
                <ChecklistCard
                    checklist={(*checklist).clone()}
                    on_toggle={on_toggle}
                    on_reveal={on_reveal}
                    on_book={on_book.clone()}
                />
                { render_info_section() }
                <section class="take-action">
                    <h2>{"Take Action"}</h2>
                    <a class="action-button action-specialist" href={SPECIALIST_URL} target="_blank" rel="noopener noreferrer">
                        {"Find a Specialist"}
                    </a>
                    <button type="button" class="action-button action-book" onclick={on_book}>
                        {"Book Appointment"}
                    </button>
                    <ScriptPanel labels={script_labels} config={props.config.clone()} />
                    <a class="action-button action-info" href={CANCER_INFO_URL} target="_blank" rel="noopener noreferrer">
                        {"Massey Cancer Center Info"}
                    </a>
                </section>
                <footer class="checklist-footer">
                    <div class="footer-partners">
                        <span>{"RVA MOMS"}</span>
                        <span class="footer-dot">{"•"}</span>
                        <span>{"MASSEY CANCER CENTER"}</span>
                    </div>
                    <p>{"Together for RVA Women's Health."}<br />{"This is a safe, private space."}</p>
                </footer>
                <IntakeDialog modal={modal.clone()} on_close={on_close} />
            </main>
        }
    }

    fn render_hero() -> Html {
        html! {
            <section class="hero">
                <p class="hero-eyebrow">{"What We Miss \"Below the Belt\""}</p>
                <p class="hero-lead">
                    {"You check your breasts. You check your cervix."}<br />
                    {"But is your "}<span class="hero-accent">{"Peach"}</span>{" part of the picture?"}
                </p>
            </section>
        }
    }

    fn render_info_section() -> Html {
        html! {
            <section class="info-section">
                <h2>{"Connect the Dots"}</h2>
                {
                    for INFO_CARDS.iter().map(|(icon, title, description)| html! {
                        <article class="info-card">
                            <div class="info-icon" role="img" aria-label={*title}>{ *icon }</div>
                            <div>
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        </article>
                    })
                }
            </section>
        }
    }

    #[derive(Properties, PartialEq)]
    struct ChecklistCardProps {
        checklist: Checklist,
        on_toggle: Callback<SymptomId>,
        on_reveal: Callback<MouseEvent>,
        on_book: Callback<MouseEvent>,
    }

    #[function_component(ChecklistCard)]
    fn checklist_card(props: &ChecklistCardProps) -> Html {
        let checklist = &props.checklist;

        html! {
            <section class="checklist-card">
                <h2 class="checklist-title">{"Private Check "}<span class="accent">{"*"}</span></h2>
                <div class="checklist-paper">
                    <p class="checklist-prompt">{"Mark what feels familiar:"}</p>
                    <ul class="symptom-list">
                        {
                            for checklist.symptoms().iter().map(|symptom| {
                                let id = symptom.id;
                                let on_toggle = props.on_toggle.clone();
                                let onchange = Callback::from(move |_: Event| on_toggle.emit(id));
                                html! {
                                    <li class={classes!("symptom-item", symptom.checked.then_some("is-checked"))}>
                                        <label>
                                            <input
                                                type="checkbox"
                                                class="visually-hidden"
                                                checked={symptom.checked}
                                                onchange={onchange}
                                            />
                                            <span class="symptom-mark" aria-hidden="true">{"*"}</span>
                                            <span class="symptom-label">{ symptom.label() }</span>
                                        </label>
                                    </li>
                                }
                            })
                        }
                    </ul>
                    <div class="result-area">
                        {
                            if checklist.result_visible() {
                                render_result(checklist, props.on_book.clone())
                            } else if checklist.has_selection() {
                                html! {
                                    <button type="button" class="reveal-button" onclick={props.on_reveal.clone()}>
                                        <span>{"See My Results"}</span>
                                        <span class="accent">{"▼"}</span>
                                    </button>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </div>
                </div>
            </section>
        }
    }

    fn render_result(checklist: &Checklist, on_book: Callback<MouseEvent>) -> Html {
        let Some(card) = checklist.recommendation() else {
            return Html::default();
        };
        let level = status_level(card.status);
        let action = match card.action {
            RecommendedAction::BookAppointment => html! {
                <button type="button" class="result-action" onclick={on_book}>
                    <span>{ card.action_label.clone() }</span>
                    <span>{"→"}</span>
                </button>
            },
            RecommendedAction::EmailList => html! {
                <a class="result-action" href={checklist.mailto_link()}>{ card.action_label.clone() }</a>
            },
        };

        html! {
            <div class="result-card" data-level={level}>
                <h3>{ card.title.clone() }</h3>
                { render_result_message(checklist, &card) }
                { action }
            </div>
        }
    }

    fn render_result_message(checklist: &Checklist, card: &Recommendation) -> Html {
        match card.status {
            Status::Critical => html! {
                <p>
                    {"Because you noted "}<strong>{ checklist.critical_clause() }</strong>
                    {", we recommend seeing a specialist soon to rule out anything serious."}
                </p>
            },
            _ => html! { <p>{ card.message.clone() }</p> },
        }
    }

    fn status_level(status: Status) -> &'static str {
        match status {
            Status::Critical => "critical",
            Status::Minor => "minor",
            Status::None => "none",
        }
    }

    #[derive(Properties, PartialEq)]
    struct ScriptPanelProps {
        labels: Vec<String>,
        config: GeneratorConfig,
    }

    #[function_component(ScriptPanel)]
    fn script_panel(props: &ScriptPanelProps) -> Html {
        let request = use_mut_ref(ScriptRequest::default);
        let rerender = use_force_update();
        let engine = use_memo(props.config.clone(), |config| {
            ScriptEngine::from_config(config.clone())
        });

        let on_generate = {
            let request = request.clone();
            let rerender = rerender.clone();
            let labels = props.labels.clone();
            let engine = engine.clone();
            Callback::from(move |_| {
                if !request.borrow_mut().begin() {
                    return;
                }
                rerender.force_update();

                let request = request.clone();
                let rerender = rerender.clone();
                let labels = labels.clone();
                let engine = engine.clone();
                spawn_local(async move {
                    let script = engine.script(&labels).await;
                    request.borrow_mut().resolve(script);
                    rerender.force_update();
                });
            })
        };

        let current = request.borrow().clone();
        let pending = current.is_pending();

        html! {
            <div class="script-panel">
                <button type="button" class="action-button action-script" onclick={on_generate} disabled={pending}>
                    { current.button_label() }
                </button>
                { current.script().map(render_script).unwrap_or_default() }
            </div>
        }
    }

    fn render_script(script: &str) -> Html {
        let text = script.to_string();
        let on_copy = Callback::from(move |_| copy_to_clipboard(&text));

        html! {
            <div class="script-card">
                <h4>{"Your Conversation Starter:"}</h4>
                <p class="script-text">{ format!("\"{script}\"") }</p>
                <button type="button" class="script-copy" onclick={on_copy}>{"Click to Copy"}</button>
            </div>
        }
    }

    fn copy_to_clipboard(text: &str) {
        if let Some(window) = web_sys::window() {
            // The returned promise is not awaited; a rejected copy leaves the page as is.
            let _ = window.navigator().clipboard().write_text(text);
        }
    }

    #[derive(Clone, Default, PartialEq)]
    struct ModalState(IntakeModal);

    enum ModalAction {
        Open(Vec<String>),
        Close,
        Edit(fn(&mut IntakeForm, String), String),
        Submit,
        /// Lands after the simulated round trip.
        Submitted,
    }

    impl Reducible for ModalState {
        type Action = ModalAction;

        fn reduce(self: Rc<Self>, action: ModalAction) -> Rc<Self> {
            let mut modal = self.0.clone();
            match action {
                ModalAction::Open(labels) => modal.open(&labels),
                ModalAction::Close => modal.close(),
                ModalAction::Edit(apply, value) => apply(modal.form_mut(), value),
                ModalAction::Submit => {
                    // A failed validation is kept on the modal.
                    let _ = modal.submit();
                }
                ModalAction::Submitted => {
                    modal.complete_submission();
                }
            }
            Rc::new(ModalState(modal))
        }
    }

    #[derive(Properties, PartialEq)]
    struct IntakeDialogProps {
        modal: UseReducerHandle<ModalState>,
        on_close: Callback<MouseEvent>,
    }

    #[function_component(IntakeDialog)]
    fn intake_dialog(props: &IntakeDialogProps) -> Html {
        let modal = props.modal.clone();

        if !modal.0.is_open() {
            return Html::default();
        }

        let edit = |apply: fn(&mut IntakeForm, String)| {
            let modal = modal.clone();
            move |value: String| modal.dispatch(ModalAction::Edit(apply, value))
        };

        let on_name = input_callback(edit(|form, value| form.name = value));
        let on_dob = input_callback(edit(|form, value| form.date_of_birth = value));
        let on_phone = input_callback(edit(|form, value| form.phone = value));
        let on_email = input_callback(edit(|form, value| form.email = value));
        let on_insurance = select_callback(edit(|form, value| {
            form.insurance = Insurance::from_value(&value)
        }));
        let on_language = select_callback(edit(|form, value| {
            form.language = Language::from_label(&value).unwrap_or_default()
        }));
        let on_notes = {
            let apply = edit(|form, value| form.notes = value);
            Callback::from(move |event: InputEvent| {
                let input: HtmlTextAreaElement = event.target_unchecked_into();
                apply(input.value());
            })
        };

        let on_submit = {
            let modal = modal.clone();
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                let starts_sending = matches!(modal.0.clone().submit(), Ok(true));
                modal.dispatch(ModalAction::Submit);
                if starts_sending {
                    let dispatcher = modal.dispatcher();
                    // Simulated round trip; nothing leaves the page.
                    spawn_local(async move {
                        yew::platform::time::sleep(Duration::from_millis(800)).await;
                        dispatcher.dispatch(ModalAction::Submitted);
                    });
                }
            })
        };

        let sending = modal.0.is_sending();
        let error = modal.0.error().map(describe_error);
        let form = modal.0.form();
        let selected_insurance = form.insurance.map(Insurance::value).unwrap_or_default();
        let on_close = props.on_close.clone();

        html! {
            <div class="modal-backdrop" role="dialog" aria-modal="true">
                <div class="modal-sheet">
                    <header class="modal-header">
                        <h2>{"Patient Intake Form"}</h2>
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Close"
                            onclick={on_close.clone()}
                        >
                            {"×"}
                        </button>
                    </header>
                    {
                        if modal.0.is_submitted() {
                            html! {
                                <div class="modal-confirmation">
                                    <div class="confirmation-mark">{"✓"}</div>
                                    <h3>{"Request Sent"}</h3>
                                    <p>
                                        {"We have received your request. "}
                                        {"A scheduler will contact you at "}
                                        <strong>{ form.phone.clone() }</strong>
                                        {" within 24 hours."}
                                    </p>
                                    <button type="button" class="action-button action-book" onclick={on_close}>
                                        {"Close"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {
                                <form class="intake-form" onsubmit={on_submit}>
                                    <div class="form-section">{"Personal Information"}</div>
                                    <div class="form-row">
                                        <label>{"Full Name *"}
                                            <input
                                                type="text"
                                                name="name"
                                                required={true}
                                                placeholder="Jane Doe"
                                                value={form.name.clone()}
                                                oninput={on_name}
                                            />
                                        </label>
                                        <label>{"Date of Birth *"}
                                            <input
                                                type="date"
                                                name="dob"
                                                required={true}
                                                value={form.date_of_birth.clone()}
                                                oninput={on_dob}
                                            />
                                        </label>
                                    </div>
                                    <div class="form-row">
                                        <label>{"Phone Number *"}
                                            <input
                                                type="tel"
                                                name="phone"
                                                required={true}
                                                placeholder="(555) 555-5555"
                                                value={form.phone.clone()}
                                                oninput={on_phone}
                                            />
                                        </label>
                                        <label>{"Email Address *"}
                                            <input
                                                type="email"
                                                name="email"
                                                required={true}
                                                placeholder="jane@example.com"
                                                value={form.email.clone()}
                                                oninput={on_email}
                                            />
                                        </label>
                                    </div>
                                    <div class="form-row">
                                        <label>{"Insurance Type"}
                                            <select name="insurance" onchange={on_insurance}>
                                                <option value="" selected={selected_insurance.is_empty()}>
                                                    {"Select Insurance..."}
                                                </option>
                                                {
                                                    for Insurance::ALL.into_iter().map(|option| {
                                                        let selected = selected_insurance == option.value();
                                                        html! {
                                                            <option value={option.value()} selected={selected}>
                                                                { option.label() }
                                                            </option>
                                                        }
                                                    })
                                                }
                                            </select>
                                        </label>
                                        <label>{"Preferred Language"}
                                            <select name="language" onchange={on_language}>
                                                {
                                                    for Language::ALL.into_iter().map(|option| html! {
                                                        <option value={option.label()} selected={form.language == option}>
                                                            { option.label() }
                                                        </option>
                                                    })
                                                }
                                            </select>
                                        </label>
                                    </div>
                                    <label class="form-notes">{"Reason for Visit / Symptoms"}
                                        <textarea
                                            name="notes"
                                            rows="4"
                                            placeholder="Please describe your concerns..."
                                            value={form.notes.clone()}
                                            oninput={on_notes}
                                        />
                                    </label>
                                    { error.map(|message| html! { <p class="form-error">{ message }</p> }).unwrap_or_default() }
                                    <button type="submit" class="action-button action-book" disabled={sending}>
                                        { if sending { "Sending..." } else { "Submit Request" } }
                                    </button>
                                    <p class="form-footnote">{"* This information is kept strictly confidential."}</p>
                                </form>
                            }
                        }
                    }
                </div>
            </div>
        }
    }

    fn input_callback(apply: impl Fn(String) + 'static) -> Callback<InputEvent> {
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            apply(input.value());
        })
    }

    fn select_callback(apply: impl Fn(String) + 'static) -> Callback<Event> {
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            apply(select.value());
        })
    }

    fn describe_error(err: &IntakeError) -> String {
        let mut message = err.to_string();
        if let Some(first) = message.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        message
    }

    /// Mount the page under `selector`. `options` may carry `api_key`,
    /// `model`, `endpoint` and `timeout_secs`; without a key scripts come from
    /// the offline templates.
    #[wasm_bindgen]
    pub fn mount_checklist_app(selector: &str, options: JsValue) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Cannot access document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches selector"))?;

        let config = checklist_wasm::generator_config(Some(options))?;

        yew::Renderer::<ChecklistApp>::with_root_and_props(target, ChecklistAppProps { config })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_checklist_app;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_checklist_app(
    _: &str,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "checklist-ui only supports the wasm32 target",
    ))
}
