//! Content views hosted inside app windows. None of them read or write window state.

use std::time::Duration;

use leptos::*;

use super::portfolio::{
    filter_projects, project_tags, ALL_PROJECTS_TAG, BIO, EXPERIENCE, FAKE_DOWNLOADS, PROJECTS,
    SKILLS, TERMINAL_FORTUNES,
};
use crate::host::random_index;

const TERMINAL_PROMPT: &str = "user@macbook-pro:~$";
const TERMINAL_BANNER: [&str; 2] = [
    "Welcome to SavageTerm v1.0.0",
    "Type anything for a 'helpful' response...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalReply {
    Clear,
    Silent,
    Fortune(&'static str),
}

fn terminal_reply(input: &str, roll: usize) -> TerminalReply {
    let input = input.trim();
    if input.eq_ignore_ascii_case("clear") {
        return TerminalReply::Clear;
    }
    if input.is_empty() {
        return TerminalReply::Silent;
    }
    TerminalReply::Fortune(TERMINAL_FORTUNES[roll % TERMINAL_FORTUNES.len()])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectsLayout {
    Grid,
    List,
}

impl ProjectsLayout {
    fn css_class(self) -> &'static str {
        match self {
            Self::Grid => "projects-results grid",
            Self::List => "projects-results list",
        }
    }
}

const MAX_DOWNLOADS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DownloadStage {
    Downloading,
    Installing,
    Critical,
    Completed,
}

impl DownloadStage {
    fn of(progress: u8) -> Self {
        match progress {
            0..=49 => Self::Downloading,
            50..=89 => Self::Installing,
            90..=99 => Self::Critical,
            _ => Self::Completed,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Self::Downloading => "download-row downloading",
            Self::Installing => "download-row installing",
            Self::Critical => "download-row critical",
            Self::Completed => "download-row completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct DownloadRow {
    id: u32,
    name: &'static str,
    size: &'static str,
    speed: String,
    progress: u8,
}

impl DownloadRow {
    fn stage(&self) -> DownloadStage {
        DownloadStage::of(self.progress)
    }

    fn advance(&mut self, step: u8) {
        self.progress = self.progress.saturating_add(step).min(100);
    }

    fn status(&self) -> String {
        match self.stage() {
            DownloadStage::Completed => "VIRUS INSTALLED".to_string(),
            _ => format!("{} - {}s", self.speed, 100 - self.progress),
        }
    }
}

/// Prepends `row` unless the list is full. Returns whether it was added.
fn push_download(rows: &mut Vec<DownloadRow>, row: DownloadRow) -> bool {
    if rows.len() >= MAX_DOWNLOADS {
        return false;
    }
    rows.insert(0, row);
    true
}

fn active_threats(rows: &[DownloadRow]) -> usize {
    rows.iter()
        .filter(|row| row.stage() != DownloadStage::Completed)
        .count()
}

#[component]
pub(super) fn AboutApp() -> impl IntoView {
    view! {
        <div class="app app-about">
            <img class="about-avatar" src=BIO.avatar alt=BIO.name />
            <h1>{BIO.name}</h1>
            <h2>{BIO.headline}</h2>
            <p>{BIO.description}</p>
            <nav class="about-links">
                <a href=BIO.github target="_blank" rel="noreferrer">"GitHub"</a>
                <a href=BIO.twitter target="_blank" rel="noreferrer">"Twitter"</a>
                <a href=BIO.linkedin target="_blank" rel="noreferrer">"LinkedIn"</a>
            </nav>
        </div>
    }
}

#[component]
pub(super) fn ProjectsApp() -> impl IntoView {
    let filter = create_rw_signal(ALL_PROJECTS_TAG);
    let layout = create_rw_signal(ProjectsLayout::Grid);

    let layout_button = move |mode: ProjectsLayout, label: &'static str| {
        view! {
            <button
                class="projects-layout-toggle"
                class:active=move || layout.get() == mode
                aria-label=label
                on:click=move |_| layout.set(mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="app app-projects">
            <div class="projects-toolbar">
                <div class="projects-filters">
                    {project_tags(PROJECTS)
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <button
                                    class="projects-filter"
                                    class:active=move || filter.get() == tag
                                    on:click=move |_| filter.set(tag)
                                >
                                    {tag}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="projects-layout">
                    {layout_button(ProjectsLayout::Grid, "Grid view")}
                    {layout_button(ProjectsLayout::List, "List view")}
                </div>
            </div>
            <div class=move || layout.get().css_class()>
                {move || {
                    filter_projects(PROJECTS, filter.get())
                        .into_iter()
                        .map(|project| {
                            view! {
                                <article class="project-card">
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <ul class="tech-tags">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| view! { <li>{*tech}</li> })
                                            .collect_view()}
                                    </ul>
                                    <a href=project.link target="_blank" rel="noreferrer">
                                        "View project"
                                    </a>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub(super) fn ExperienceApp() -> impl IntoView {
    view! {
        <ol class="app app-experience">
            {EXPERIENCE
                .iter()
                .map(|entry| {
                    view! {
                        <li class="timeline-entry">
                            <span class="timeline-period">{entry.period}</span>
                            <h3>{entry.role}</h3>
                            <h4>{entry.company}</h4>
                            <p>{entry.description}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub(super) fn SkillsApp() -> impl IntoView {
    view! {
        <div class="app app-skills">
            {SKILLS
                .iter()
                .map(|(group, skills)| {
                    view! {
                        <section>
                            <h3>{*group}</h3>
                            <ul>{skills.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(super) fn ContactApp() -> impl IntoView {
    let sent = create_rw_signal(false);

    view! {
        <div class="app app-contact">
            <aside>
                <h2>"Let's talk"</h2>
                <p>"I'm always interested in hearing about new projects and opportunities."</p>
                <span class="contact-email">{BIO.email.trim_start_matches("mailto:")}</span>
            </aside>
            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form on:submit=move |ev| {
                            ev.prevent_default();
                            sent.set(true);
                        }>
                            <label>"Name" <input type="text" required=true /></label>
                            <label>"Email" <input type="email" required=true /></label>
                            <label>"Message" <textarea required=true></textarea></label>
                            <button type="submit">"Send Message"</button>
                        </form>
                    }
                }
            >
                <p class="contact-sent">"Thanks! I'll get back to you soon."</p>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn SettingsApp() -> impl IntoView {
    view! {
        <div class="app app-settings">
            <h2>"System Preferences"</h2>
            <p>"Theme customization and other settings currently under development."</p>
        </div>
    }
}

#[component]
pub(super) fn SafariApp() -> impl IntoView {
    let url = create_rw_signal("masudpilot.info".to_string());
    let bookmarks = [
        ("GitHub", BIO.github),
        ("LinkedIn", BIO.linkedin),
        ("Twitter", BIO.twitter),
    ];

    view! {
        <div class="app app-safari">
            <div class="safari-toolbar">
                <input
                    class="safari-address"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </div>
            <div class="safari-favorites">
                <h3>"Favorites"</h3>
                {bookmarks
                    .into_iter()
                    .map(|(name, href)| {
                        view! {
                            <a class="safari-bookmark" href=href target="_blank" rel="noreferrer">
                                {name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub(super) fn VsCodeApp() -> impl IntoView {
    let files: [(&'static str, &'static str); 3] = [
        (
            "window_manager.rs",
            "// You are looking at this file right now!\npub fn effective_window_rect(..) -> LayoutRect { .. }",
        ),
        ("reducer.rs", "pub fn reduce_desktop(state, action) -> Vec<RuntimeEffect> { .. }"),
        ("dock.rs", "#[component]\npub(super) fn Dock() -> impl IntoView { .. }"),
    ];
    let selected = create_rw_signal(0usize);

    view! {
        <div class="app app-vscode">
            <ul class="vscode-explorer">
                {files
                    .iter()
                    .enumerate()
                    .map(|(idx, (name, _))| {
                        view! {
                            <li
                                class:active=move || selected.get() == idx
                                on:click=move |_| selected.set(idx)
                            >
                                {*name}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <pre class="vscode-editor">{move || files[selected.get()].1}</pre>
        </div>
    }
}

#[component]
pub(super) fn TerminalApp() -> impl IntoView {
    let history = create_rw_signal(
        TERMINAL_BANNER
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>(),
    );
    let line = create_rw_signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let input = line.get_untracked();
        line.set(String::new());
        match terminal_reply(&input, random_index(TERMINAL_FORTUNES.len())) {
            TerminalReply::Clear => history.set(vec![TERMINAL_BANNER[0].to_string()]),
            TerminalReply::Silent => {
                history.update(|h| h.push(format!("{TERMINAL_PROMPT} {input}")));
            }
            TerminalReply::Fortune(fortune) => history.update(|h| {
                h.push(format!("{TERMINAL_PROMPT} {input}"));
                h.push(fortune.to_string());
            }),
        }
    };

    view! {
        <div class="app app-terminal">
            <For each=move || history.get().into_iter().enumerate() key=|(idx, _)| *idx let:entry>
                <div class="terminal-line">{entry.1}</div>
            </For>
            <label class="terminal-input">
                <span>{TERMINAL_PROMPT}</span>
                <input
                    type="text"
                    autocomplete="off"
                    prop:value=move || line.get()
                    on:input=move |ev| line.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>
        </div>
    }
}

#[component]
pub(super) fn GamesApp() -> impl IntoView {
    let playing = create_rw_signal(false);

    view! {
        <div class="app app-games">
            <Show
                when=move || playing.get()
                fallback=move || {
                    view! {
                        <button class="game-card" on:click=move |_| playing.set(true)>
                            <h3>"Flappy Bird"</h3>
                            <p>"Tap to fly through the pipes!"</p>
                        </button>
                    }
                }
            >
                <div class="game-player">
                    <button on:click=move |_| playing.set(false)>"Back"</button>
                    <iframe src="https://flappybird.io/" title="Flappy Bird"></iframe>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn DownloadsApp() -> impl IntoView {
    let rows = create_rw_signal(Vec::<DownloadRow>::new());
    let critical_alert = create_rw_signal(false);
    let next_id = store_value(0u32);

    let spawn_download = move || {
        let (name, size) = FAKE_DOWNLOADS[random_index(FAKE_DOWNLOADS.len())];
        let id = next_id.get_value();
        next_id.set_value(id.wrapping_add(1));
        let row = DownloadRow {
            id,
            name,
            size,
            speed: format!("{}.{} MB/s", 2 + random_index(10), random_index(10)),
            progress: 0,
        };
        let mut added = false;
        rows.update(|rows| added = push_download(rows, row));
        if added && random_index(10) >= 7 {
            critical_alert.set(true);
            set_timeout(move || critical_alert.set(false), Duration::from_secs(2));
        }
    };
    if let Ok(interval) = set_interval_with_handle(spawn_download, Duration::from_secs(2)) {
        on_cleanup(move || interval.clear());
    }
    if let Ok(interval) = set_interval_with_handle(
        move || {
            rows.update(|rows| {
                for row in rows.iter_mut() {
                    row.advance(random_index(11) as u8);
                }
            })
        },
        Duration::from_millis(100),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="app app-downloads">
            <Show when=move || critical_alert.get() fallback=|| ()>
                <div class="downloads-alert" role="alert">"CRITICAL SECURITY ALERT"</div>
            </Show>
            <header class="downloads-header">
                <h2>"Downloads"</h2>
                <span class="downloads-threats">
                    {move || format!("{} Active Threats", rows.with(|rows| active_threats(rows)))}
                </span>
            </header>
            <Show
                when=move || rows.with(|rows| !rows.is_empty())
                fallback=|| view! { <p class="downloads-empty">"Initializing Botnet Connection..."</p> }
            >
                <ul>
                    <For each=move || rows.get() key=|row| row.id let:row>
                        <DownloadItem id=row.id rows=rows />
                    </For>
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn DownloadItem(id: u32, rows: RwSignal<Vec<DownloadRow>>) -> impl IntoView {
    let row = create_memo(move |_| {
        rows.with(|rows| rows.iter().find(|row| row.id == id).cloned())
    });
    let stage = move || row.get().map_or(DownloadStage::Downloading, |row| row.stage());
    let progress = move || row.get().map_or(0, |row| row.progress);

    view! {
        <li class=move || stage().css_class()>
            <span class="download-name">{move || row.get().map(|row| row.name)}</span>
            <div class="download-progress">
                <div class="download-progress-bar" style=move || format!("width: {}%", progress())></div>
            </div>
            <span class="download-size">{move || row.get().map(|row| row.size)}</span>
            <span class="download-status">{move || row.get().map(|row| row.status())}</span>
            <Show
                when=move || matches!(stage(), DownloadStage::Installing | DownloadStage::Critical)
                fallback=|| ()
            >
                <span class="download-warning">"Defender failed to block"</span>
            </Show>
        </li>
    }
}
