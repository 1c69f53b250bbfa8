use crate::components::{
    footer::Footer,
    form_error::FormError,
    header::{Header, NavLink},
    industry_select::IndustrySelect,
    meta::{MetaDescription, MetaTitle},
};
use easy_privacy_types::intake::IntakeForm;
use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <MetaTitle title="Easy Privacy" />
        <MetaDescription text="Your One-Stop Solution for Privacy Compliance" />
        <div class="flex flex-col min-h-screen bg-white text-gray-800">
            <Header>
                <NavLink href="#features" label="Features" />
                <NavLink href="#generator" label="Policy Generator" />
                <NavLink href="#faq" label="FAQs" />
                <NavLink href="#contact" label="Contact" />
            </Header>
            <main class="flex-1">
                <Hero />
                <Features />
                <section id="generator" class="w-full py-12 md:py-24 lg:py-32 bg-gray-50">
                    <div class="container px-4 md:px-6 mx-auto">
                        <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl text-center mb-12 text-blue-800">
                            "Generate Your Privacy Policy"
                        </h2>
                        <Intake />
                    </div>
                </section>
                <Faq />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

/// Company name + industry form that starts the wizard.
#[component]
fn Intake() -> impl IntoView {
    let form = RwSignal::new(IntakeForm::default());
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    let selected = Signal::derive(move || {
        form.with(|form| {
            form.industry
                .map(|key| key.as_key().to_string())
                .unwrap_or_default()
        })
    });

    let submit = move |_| match form.with(IntakeForm::submit) {
        Ok(href) => {
            set_error.set(None);
            log::debug!("starting wizard {href}");
            navigate(&href, Default::default());
        }
        Err(e) => set_error.set(Some(e.to_string())),
    };

    view! {
        <div class="mx-auto max-w-md space-y-4 bg-white p-8 rounded-lg shadow-md">
            <div class="space-y-2">
                <label for="companyName" class="text-sm font-medium text-gray-700">
                    "Company Name"
                </label>
                <input
                    id="companyName"
                    placeholder="Enter your company name"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=move || form.with(|form| form.company_name.clone())
                    on:input=move |ev| {
                        form.update(|form| form.company_name = event_target_value(&ev))
                    }
                />
            </div>
            <div class="space-y-2">
                <label for="industry" class="text-sm font-medium text-gray-700">
                    "Select an industry"
                </label>
                <IndustrySelect
                    selected
                    on_select=move |value: String| form.update(|form| form.select_industry(&value))
                />
            </div>
            <FormError message=error />
            <button
                class="w-full px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-green-700 transition-colors"
                on:click=submit
            >
                "Generate Policy"
            </button>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="w-full py-12 md:py-24 lg:py-32 xl:py-48 bg-gradient-to-br from-blue-50 to-green-50">
            <div class="container px-4 md:px-6 mx-auto">
                <div class="flex flex-col items-center space-y-4 text-center">
                    <div class="space-y-2">
                        <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl lg:text-6xl text-blue-800">
                            "Simplify Your Privacy Journey"
                        </h1>
                        <p class="mx-auto max-w-[700px] text-gray-600 md:text-xl">
                            "Your One-Stop Solution for Privacy Compliance. Get started in minutes. Dependable and hassle-free."
                        </p>
                    </div>
                    <div class="space-x-4">
                        <a
                            href="#generator"
                            class="inline-flex items-center justify-center px-6 py-3 text-base font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 transition-colors"
                        >
                            "Get Started"
                            <span class="ml-2">
                                <Icon icon=i::FaArrowRightSolid width="1.2em" height="1.2em" />
                            </span>
                        </a>
                        <a
                            href="#features"
                            class="inline-flex items-center justify-center px-6 py-3 text-base font-medium text-blue-600 bg-white border border-blue-600 rounded-md hover:bg-blue-50 transition-colors"
                        >
                            "Learn More"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: icondata::Icon,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center space-y-2 p-6 bg-white rounded-lg shadow-md transition-shadow hover:shadow-lg">
            <span class="text-blue-600 mb-2">
                <Icon icon width="3em" height="3em" />
            </span>
            <h3 class="text-xl font-bold text-gray-800">{title}</h3>
            <p class="text-gray-600 text-center">{text}</p>
        </div>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="w-full py-12 md:py-24 lg:py-32 bg-white">
            <div class="container px-4 md:px-6 mx-auto">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl text-center mb-12 text-blue-800">
                    "Why Choose Easy Privacy?"
                </h2>
                <div class="grid gap-10 sm:grid-cols-2 md:grid-cols-3">
                    <FeatureCard
                        icon=i::FaRobotSolid
                        title="DPO Assistance"
                        text="Generate your privacy policy in seconds and have a chatbot to answer all your questions related to DPDP Act"
                    />
                    <FeatureCard
                        icon=i::BsCheckAll
                        title="Consent and Right Management"
                        text="Handle your consent layer and service your DSR requests + audit logs."
                    />
                    <FeatureCard
                        icon=i::AiSearchOutlined
                        title="Data Discovery"
                        text="Seamlessly see where is all your user data across structured and unstructured data + old and new data"
                    />
                </div>
            </div>
        </section>
    }
}

const FAQS: &[(&str, &str)] = &[
    (
        "What is the DPDP Act of India?",
        "The DPDP (Data Protection and Privacy) Act of India is a comprehensive legislation aimed at safeguarding the privacy and personal data of individuals. It outlines the responsibilities of organizations in handling personal data and the rights of individuals in relation to their data.",
    ),
    (
        "How does your service help in complying with the DPDP Act?",
        "Our service provides an end-to-end solution for compliance with the DPDP Act. From data discovery to action items, managing your consent layer to servicing DSR requests, custom policy generation to chat assist powered by AI, and much more. Core idea is to reduce the burden of compliance on your organization to a bare minimum.",
    ),
    (
        "How frequently is the information updated?",
        "We continuously monitor updates to the DPDP Act and other relevant regulations. Our service ensures that your privacy policy and chatbot are always up-to-date with the latest legal requirements.",
    ),
];

#[component]
fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="w-full py-12 md:py-24 lg:py-32 bg-white">
            <div class="container px-4 md:px-6 mx-auto">
                <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl text-center mb-12 text-blue-800">
                    "Frequently Asked Questions"
                </h2>
                <div class="grid gap-8 mx-auto max-w-3xl">
                    {FAQS
                        .iter()
                        .map(|(question, answer)| {
                            view! {
                                <div class="space-y-2 bg-gray-50 p-6 rounded-lg">
                                    <h3 class="text-xl font-bold text-gray-800">{*question}</h3>
                                    <p class="text-gray-600">{*answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="w-full py-12 md:py-24 lg:py-32 bg-blue-50">
            <div class="container px-4 md:px-6 mx-auto">
                <div class="flex flex-col items-center space-y-4 text-center">
                    <h2 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl text-blue-800">
                        "Ready to Secure Your Website's Privacy?"
                    </h2>
                    <a
                        href="mailto:easyprivacyindia@gmail.com"
                        rel="external"
                        class="inline-flex items-center justify-center px-6 py-3 text-base font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 transition-colors"
                    >
                        "Email us at easyprivacyindia@gmail.com"
                    </a>
                </div>
            </div>
        </section>
    }
}
