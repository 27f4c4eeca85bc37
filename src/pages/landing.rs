use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::effects::counter::StatCounter;
use crate::effects::reveal::Reveal;
use crate::effects::scroll::scroll_to_section;
use crate::effects::typing::TypingTitle;

const STATS: &[(&str, &str)] = &[
    ("500+", "Events per second"),
    ("24/7", "Monitoring"),
    ("99.9%", "Uptime"),
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("fa-shield-halved", "Centralised Detection", "Logs from every host, firewall and service land in one searchable place."),
    ("fa-bell", "Real-time Alerting", "Correlation rules raise alerts the moment a pattern matches."),
    ("fa-chart-line", "Dashboards", "Live views of authentication failures, traffic spikes and rule hits."),
    ("fa-box-archive", "Retention", "Hot storage for recent events, compressed archives for audits."),
];

const TECHNOLOGIES: &[(&str, &str)] = &[
    ("Elasticsearch", "Indexing and search over normalised events."),
    ("Logstash", "Parsing pipelines for syslog, Windows events and JSON."),
    ("Kibana", "Dashboards and investigation views."),
    ("Wazuh", "Host agents, integrity monitoring and rule engine."),
];

/// (src, alt, data-title)
const ARCHITECTURE_IMAGES: &[(&str, &str, &str)] = &[
    ("img/deployment-architecture.png", "SIEM Deployment Architecture", "Deployment overview"),
    ("img/ingest-pipeline.png", "Log ingestion pipeline", "Ingestion pipeline"),
    ("img/alert-flow.png", "Alert correlation flow", "Alert flow"),
    ("img/dashboard.png", "Operations dashboard", ""),
];

const DETAILS: &[(&str, &str)] = &[
    ("Collection", "Agents and syslog forwarders ship events over TLS."),
    ("Processing", "Pipelines parse, enrich and normalise every record."),
    ("Storage", "A replicated cluster keeps 90 days hot."),
    ("Response", "Alerts route to the on-call rotation with context attached."),
];

const TEAM: &[(&str, &str, &str)] = &[
    ("img/team/analyst.jpg", "Security Analyst", "Detection rules and triage"),
    ("img/team/engineer.jpg", "Platform Engineer", "Cluster and pipelines"),
    ("img/team/lead.jpg", "Project Lead", "Roadmap and integrations"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("about");
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <section id="home" class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <TypingTitle text="Security Visibility, Centralised" />
                    <p class="hero-subtitle">
                        {"SIEM Central collects, correlates and alerts on events from across your infrastructure."}
                    </p>
                    <button class="hero-cta" onclick={explore}>{"Explore"}</button>
                </div>
                <div class="floating-card card-one">{"Threat detected"}</div>
                <div class="floating-card card-two">{"Rule matched"}</div>
            </section>

            <section id="about" class="about-section">
                <h2 class="section-title">{"About the Project"}</h2>
                <div class="stats-row">
                    {
                        STATS.iter().map(|(value, label)| html! {
                            <StatCounter value={*value} label={*label} />
                        }).collect::<Html>()
                    }
                </div>
                <div class="bento-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, (icon, title, body))| html! {
                            <Reveal class="bento-card" stagger={Some(index)}>
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="technologies" class="technologies-section">
                <h2 class="section-title">{"Technologies"}</h2>
                <div class="tech-grid">
                    {
                        TECHNOLOGIES.iter().enumerate().map(|(index, (name, body))| html! {
                            <Reveal class="tech-card" stagger={Some(index)}>
                                <h3>{*name}</h3>
                                <p>{*body}</p>
                                <span class="tech-tag">{*name}</span>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="architecture" class="architecture-section">
                <h2 class="section-title">{"Architecture"}</h2>
                <div class="architecture-layout">
                    <Reveal class="architecture-image">
                        {
                            ARCHITECTURE_IMAGES.iter().take(1).map(|(src, alt, title)| html! {
                                <img class="arch-img" src={*src} alt={*alt} data-title={*title} loading="lazy" />
                            }).collect::<Html>()
                        }
                    </Reveal>
                    <div class="architecture-details">
                        {
                            DETAILS.iter().map(|(title, body)| html! {
                                <Reveal class="detail-card">
                                    <h4>{*title}</h4>
                                    <p>{*body}</p>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="gallery-strip">
                    {
                        ARCHITECTURE_IMAGES.iter().skip(1).map(|(src, alt, title)| html! {
                            <img class="gallery-image" src={*src} alt={*alt} data-title={*title} loading="lazy" />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="team" class="team-section">
                <h2 class="section-title">{"Team"}</h2>
                <div class="team-grid">
                    {
                        TEAM.iter().enumerate().map(|(index, (photo, role, focus))| html! {
                            <Reveal class="team-card" stagger={Some(index)}>
                                <div class="team-image">
                                    <img src={*photo} alt={*role} loading="lazy" />
                                </div>
                                <div class="team-info">
                                    <h3>{*role}</h3>
                                    <p>{*focus}</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <footer class="footer">
                <p>{"SIEM Central"}</p>
            </footer>

            <Lightbox />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        text-align: center;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, #02457a 0%, #018abe 100%);
        z-index: -1;
    }
    .hero-title {
        font-size: 3rem;
        color: white;
        min-height: 1.2em;
    }
    .typing-text::after {
        content: '|';
        animation: blink 1s step-end infinite;
    }
    @keyframes blink {
        50% { opacity: 0; }
    }
    .hero-subtitle {
        color: rgba(255, 255, 255, 0.85);
        font-size: 1.2rem;
    }
    .floating-card {
        position: absolute;
        padding: 0.75rem 1.25rem;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.15);
        backdrop-filter: blur(10px);
        color: white;
        animation: float 6s ease-in-out infinite;
        transition: transform 0.3s ease;
    }
    .floating-card:hover {
        transform: translateY(-5px) scale(1.05);
    }
    .card-one { top: 20%; left: 10%; }
    .card-two { bottom: 20%; right: 10%; animation-delay: 2s; }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-15px); }
    }
    section {
        padding: 5rem 2rem;
    }
    .stats-row {
        display: flex;
        justify-content: center;
        gap: 3rem;
        margin-bottom: 3rem;
    }
    .stat {
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .stat-number {
        font-size: 2.5rem;
        font-weight: bold;
        color: #02457a;
    }
    .bento-grid, .tech-grid, .team-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
    }
    .bento-card, .tech-card, .team-card, .detail-card {
        padding: 1.5rem;
        border-radius: 16px;
        background: white;
        box-shadow: 0 10px 30px rgba(2, 69, 122, 0.1);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .bento-card:hover, .tech-card:hover, .team-card:hover {
        transform: perspective(1000px) rotateX(5deg) rotateY(5deg) translateY(-10px);
        box-shadow: 0 25px 50px rgba(2, 69, 122, 0.3);
    }
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s cubic-bezier(0.16, 1, 0.3, 1), transform 0.6s cubic-bezier(0.16, 1, 0.3, 1);
    }
    .reveal.active {
        opacity: 1;
        transform: translateY(0);
    }
    .animate-fade-in-up {
        animation: fadeInUp 0.6s ease both;
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .architecture-layout {
        display: grid;
        grid-template-columns: 3fr 2fr;
        gap: 2rem;
    }
    .arch-img, .gallery-image {
        width: 100%;
        border-radius: 12px;
        transition: transform 0.3s ease;
    }
    .arch-img:hover {
        transform: perspective(1000px) scale(1.02);
    }
    .gallery-strip {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        margin-top: 2rem;
    }
    .team-image img {
        width: 100%;
        border-radius: 12px;
        transition: transform 0.3s ease;
    }
    .team-card:hover .team-image img {
        transform: scale(1.1);
    }
    .team-info {
        transition: transform 0.3s ease;
    }
    .team-card:hover .team-info {
        transform: translateY(-5px);
    }
    @media (max-width: 768px) {
        .architecture-layout {
            grid-template-columns: 1fr;
        }
        .gallery-strip {
            grid-template-columns: 1fr;
        }
        .stats-row {
            flex-direction: column;
            gap: 1.5rem;
        }
    }
"#;
