//! First-run form that collects the profile.

use dioxus::prelude::*;

use crate::core::countries::COUNTRIES;
use crate::core::profile::{ProfileDraft, ProfileError};
use crate::core::temporal::today;
use crate::hooks::use_profile_store;
use crate::t;

fn error_message(error: &ProfileError) -> String {
    match error {
        ProfileError::NameTooShort => t!("error-name-too-short"),
        ProfileError::BirthYearOutOfRange { min, max } => {
            t!("error-birth-year-range", min = (*min), max = (*max))
        }
        ProfileError::BirthYearInvalid => t!("error-birth-year-invalid"),
        ProfileError::MissingNationality => t!("error-nationality-missing"),
    }
}

#[component]
pub fn ProfileForm() -> Element {
    let store = use_profile_store();
    let mut draft = use_signal(ProfileDraft::default);
    let mut errors = use_signal(Vec::<ProfileError>::new);

    let current_year = today().year();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft.read().validate(current_year) {
            Ok(profile) => {
                tracing::info!(nationality = %profile.nationality, "profile submitted");
                errors.set(Vec::new());
                store.submit(profile);
            }
            Err(found) => {
                tracing::debug!(count = found.len(), "profile form rejected");
                errors.set(found);
            }
        }
    };

    let field_error = move |pick: fn(&ProfileError) -> bool| -> Option<String> {
        errors.read().iter().find(|e| pick(e)).map(error_message)
    };
    let name_error = field_error(|e| matches!(e, ProfileError::NameTooShort));
    let year_error = field_error(|e| {
        matches!(
            e,
            ProfileError::BirthYearOutOfRange { .. } | ProfileError::BirthYearInvalid
        )
    });
    let nationality_error = field_error(|e| matches!(e, ProfileError::MissingNationality));

    let current = draft();

    rsx! {
        section { class: "page page-form",
            div { class: "profile-form",
                header { class: "profile-form__header",
                    h1 { class: "profile-form__title", {t!("form-title")} }
                    p { class: "profile-form__subtitle", {t!("form-subtitle")} }
                }

                form { class: "profile-form__body", onsubmit: on_submit,
                    div { class: "profile-form__field",
                        label { r#for: "profile-name", {t!("form-name-label")} }
                        input {
                            id: "profile-name",
                            r#type: "text",
                            placeholder: t!("form-name-placeholder"),
                            value: "{current.name}",
                            oninput: move |evt| draft.write().name = evt.value(),
                        }
                        if let Some(message) = name_error {
                            p { class: "profile-form__error", "{message}" }
                        }
                    }

                    div { class: "profile-form__field",
                        label { r#for: "profile-birth-year", {t!("form-birth-year-label")} }
                        input {
                            id: "profile-birth-year",
                            r#type: "number",
                            min: "1900",
                            max: "{current_year}",
                            value: "{current.birth_year}",
                            oninput: move |evt| draft.write().birth_year = evt.value(),
                        }
                        if let Some(message) = year_error {
                            p { class: "profile-form__error", "{message}" }
                        }
                    }

                    div { class: "profile-form__field",
                        label { r#for: "profile-nationality", {t!("form-nationality-label")} }
                        select {
                            id: "profile-nationality",
                            value: "{current.nationality}",
                            onchange: move |evt| draft.write().nationality = evt.value(),
                            option { value: "", disabled: true, {t!("form-nationality-placeholder")} }
                            for country in COUNTRIES.iter() {
                                option { key: "{country.code}", value: "{country.code}", "{country.label}" }
                            }
                        }
                        if let Some(message) = nationality_error {
                            p { class: "profile-form__error", "{message}" }
                        }
                    }

                    fieldset { class: "profile-form__lifestyle",
                        legend { {t!("form-lifestyle-heading")} }
                        label { class: "profile-form__check",
                            input {
                                r#type: "checkbox",
                                checked: current.healthy_food,
                                onchange: move |evt| draft.write().healthy_food = evt.checked(),
                            }
                            {t!("form-healthy-food")}
                        }
                        label { class: "profile-form__check",
                            input {
                                r#type: "checkbox",
                                checked: current.running,
                                onchange: move |evt| draft.write().running = evt.checked(),
                            }
                            {t!("form-running")}
                        }
                        label { class: "profile-form__check",
                            input {
                                r#type: "checkbox",
                                checked: current.alcohol,
                                onchange: move |evt| draft.write().alcohol = evt.checked(),
                            }
                            {t!("form-alcohol")}
                        }
                        label { class: "profile-form__check",
                            input {
                                r#type: "checkbox",
                                checked: current.smoking,
                                onchange: move |evt| draft.write().smoking = evt.checked(),
                            }
                            {t!("form-smoking")}
                        }
                    }

                    button { r#type: "submit", class: "button button--primary profile-form__submit",
                        {t!("form-submit")}
                    }
                }
            }
        }
    }
}
