use chrono::{DateTime, TimeZone, Utc};
use enclose::enc;
use indexmap::IndexMap;
use itertools::Itertools;
use seed::{prelude::*, *};
use serde::{Deserialize, Serialize};
use std::mem;
use uuid::Uuid;
use web_sys::HtmlInputElement;

mod boulder;
mod color;
mod editor;
mod grade;
mod group;
mod place;
mod session;
mod stats;
mod user;
mod util;

use boulder::{Ascent, AscentStyle, Boulder};
use color::HoldColor;
use editor::{BucketId, CustomGrade, GradeEditor};
use grade::GradeSystem;
use group::{Group, Role};
use place::{Place, PlaceKind};
use session::Session;
use user::User;

const ENTER_KEY: u32 = 13;
const ESC_KEY: u32 = 27;
const STORAGE_KEY: &str = "cragbook-1";

// Boulders on the main list are graded on this built-in scale.
const BOULDER_SCALE: &str = "font";

type BoulderId = Uuid;
type PlaceId = Uuid;
type SessionId = Uuid;
type SchemeId = Uuid;
type MemberId = Uuid;

const PAGES: [(&str, Page); 5] = [
    ("Log", Page::Log),
    ("Boulders", Page::Boulders),
    ("Places", Page::Places),
    ("Grades", Page::Grades),
    ("Group", Page::Group),
];

// ------ ------
//     Model
// ------ ------

struct Model {
    data: Data,
    refs: Refs,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
struct Data {
    page: Page,
    user: User,
    group: Group,
    places: IndexMap<PlaceId, Place>,
    boulders: IndexMap<BoulderId, Boulder>,
    sessions: IndexMap<SessionId, Session>,
    active_session: Option<SessionId>,
    editor: GradeEditor,
    chosen_system: String,
    schemes: IndexMap<SchemeId, CustomScheme>,

    new_boulder_title: String,
    editing_boulder: Option<EditingBoulder>,
    choosing_color: bool,
    chosen_color: String,
    chosen_grade: String,
    chosen_place: Option<PlaceId>,
    session_place: Option<PlaceId>,
    new_place_name: String,
    new_place_kind: PlaceKind,
    new_member_name: String,
    scheme_name: String,
}

impl Default for Data {
    fn default() -> Data {
        Data {
            page: Page::Log,
            user: User::default(),
            group: Group::default(),
            places: Place::defaults(),
            boulders: IndexMap::new(),
            sessions: IndexMap::new(),
            active_session: None,
            editor: GradeEditor::default(),
            chosen_system: String::new(),
            schemes: IndexMap::new(),
            new_boulder_title: String::new(),
            editing_boulder: None,
            choosing_color: false,
            chosen_color: "red".into(),
            chosen_grade: String::new(),
            chosen_place: None,
            session_place: None,
            new_place_name: String::new(),
            new_place_kind: PlaceKind::Indoor,
            new_member_name: String::new(),
            scheme_name: String::new(),
        }
    }
}

#[derive(Default)]
struct Refs {
    editing_boulder_input: ElRef<HtmlInputElement>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
enum Page {
    Log,
    Boulders,
    Places,
    Grades,
    Group,
}

// ------ CustomScheme ------

/// A finished grading scheme: the buckets carved in the editor, frozen
/// under a name together with the reference scale they partition.
#[derive(Serialize, Deserialize, Debug)]
struct CustomScheme {
    name: String,
    reference: String,
    grades: Vec<CustomGrade>,
}

// ------ EditingBoulder ------

#[derive(Serialize, Deserialize)]
struct EditingBoulder {
    id: BoulderId,
    title: String,
}

// ------ ------
//     Init
// ------ ------

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
    let data = LocalStorage::get(STORAGE_KEY).unwrap_or_default();

    Model {
        data,
        refs: Refs::default(),
    }
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    PageChanged(Page),

    NewBoulderTitleChanged(String),
    CreateNewBoulder,
    RemoveBoulder(BoulderId),

    StartBoulderEdit(BoulderId),
    EditingBoulderTitleChanged(String),
    SaveEditingBoulder,
    CancelBoulderEdit,

    AddAscentToBoulder(BoulderId, AscentStyle),

    ToggleChoosingColor,
    ChooseColor(String),
    ChooseGrade(String),
    ChoosePlace(String),

    NewPlaceNameChanged(String),
    NewPlaceKindToggled,
    CreateNewPlace,
    RemovePlace(PlaceId),

    ChooseSessionPlace(String),
    StartSession,
    EndSession,
    RemoveSession(SessionId),

    SelectGradeSystem(String),
    AddGradeBucket,
    RemoveGradeBucket(BucketId),
    GradeBucketLabelChanged(BucketId, String),
    GradeHandleMoved(usize, usize, usize),
    SchemeNameChanged(String),
    SaveScheme,
    RemoveScheme(SchemeId),

    UserNameChanged(String),
    GroupNameChanged(String),
    NewMemberNameChanged(String),
    AddMember,
    RemoveMember(MemberId),

    NoOp,
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    let data = &mut model.data;
    match msg {
        Msg::PageChanged(page) => {
            data.page = page;
        }

        Msg::NewBoulderTitleChanged(title) => {
            data.new_boulder_title = title;
        }
        Msg::CreateNewBoulder => {
            if !data.new_boulder_title.trim().is_empty() {
                data.boulders.insert(
                    BoulderId::new_v4(),
                    Boulder {
                        title: mem::take(&mut data.new_boulder_title),
                        color: data.chosen_color.clone(),
                        grade: data.chosen_grade.clone(),
                        place_id: data.chosen_place,
                        ascents: Vec::new(),
                    },
                );
                data.boulders.sort_by(|_ak, av, _bk, bv| av.title.cmp(&bv.title));
            }
        }
        Msg::RemoveBoulder(boulder_id) => {
            data.boulders.shift_remove(&boulder_id);
        }

        Msg::StartBoulderEdit(boulder_id) => {
            if let Some(boulder) = data.boulders.get(&boulder_id) {
                data.editing_boulder = Some(EditingBoulder {
                    id: boulder_id,
                    title: boulder.title.clone(),
                });
            }

            let input = model.refs.editing_boulder_input.clone();
            orders.after_next_render(move |_| {
                input.get().expect("get `editing_boulder_input`").select();
                Msg::NoOp
            });
        }
        Msg::EditingBoulderTitleChanged(title) => {
            if let Some(ref mut editing_boulder) = data.editing_boulder {
                editing_boulder.title = title;
            }
        }
        Msg::SaveEditingBoulder => {
            if let Some(editing_boulder) = data.editing_boulder.take() {
                if let Some(boulder) = data.boulders.get_mut(&editing_boulder.id) {
                    boulder.title = editing_boulder.title;
                    data.boulders.sort_by(|_ak, av, _bk, bv| av.title.cmp(&bv.title));
                }
            }
        }
        Msg::CancelBoulderEdit => {
            data.editing_boulder = None;
        }

        Msg::AddAscentToBoulder(boulder_id, style) => {
            let session_id = data.active_session;
            if let Some(boulder) = data.boulders.get_mut(&boulder_id) {
                boulder.ascents.push(Ascent {
                    style,
                    timestamp: Utc::now().timestamp(),
                    session_id,
                });
            }
        }

        Msg::ToggleChoosingColor => {
            data.choosing_color = !data.choosing_color;
        }
        Msg::ChooseColor(color) => {
            data.chosen_color = color;
            data.choosing_color = false;
        }
        Msg::ChooseGrade(grade) => {
            data.chosen_grade = grade;
        }
        Msg::ChoosePlace(place_id) => {
            data.chosen_place = Uuid::parse_str(&place_id).ok();
        }

        Msg::NewPlaceNameChanged(name) => {
            data.new_place_name = name;
        }
        Msg::NewPlaceKindToggled => {
            data.new_place_kind = data.new_place_kind.toggled();
        }
        Msg::CreateNewPlace => {
            if !data.new_place_name.trim().is_empty() {
                data.places.insert(
                    PlaceId::new_v4(),
                    Place {
                        name: mem::take(&mut data.new_place_name),
                        kind: data.new_place_kind,
                    },
                );
            }
        }
        Msg::RemovePlace(place_id) => {
            data.places.shift_remove(&place_id);
            if data.chosen_place == Some(place_id) {
                data.chosen_place = None;
            }
            if data.session_place == Some(place_id) {
                data.session_place = None;
            }
        }

        Msg::ChooseSessionPlace(place_id) => {
            data.session_place = Uuid::parse_str(&place_id).ok();
        }
        Msg::StartSession => {
            if data.active_session.is_none() {
                if let Some(place_id) = data.session_place {
                    let session_id = SessionId::new_v4();
                    data.sessions.insert(
                        session_id,
                        Session {
                            place_id,
                            started: Utc::now().timestamp(),
                            ended: None,
                        },
                    );
                    data.active_session = Some(session_id);
                }
            }
        }
        Msg::EndSession => {
            if let Some(session_id) = data.active_session.take() {
                if let Some(session) = data.sessions.get_mut(&session_id) {
                    session.ended = Some(Utc::now().timestamp());
                }
            }
        }
        Msg::RemoveSession(session_id) => {
            data.sessions.shift_remove(&session_id);
            if data.active_session == Some(session_id) {
                data.active_session = None;
            }
        }

        Msg::SelectGradeSystem(key) => {
            if let Some(system) = GradeSystem::defaults().shift_remove(&key) {
                data.editor.select_system(system);
                data.chosen_system = key;
            }
        }
        Msg::AddGradeBucket => {
            data.editor.add_bucket();
        }
        Msg::RemoveGradeBucket(bucket_id) => {
            data.editor.remove_bucket(bucket_id);
        }
        Msg::GradeBucketLabelChanged(bucket_id, label) => {
            data.editor.set_label(bucket_id, label);
        }
        Msg::GradeHandleMoved(position, new_min, new_max) => {
            data.editor.move_handles(position, new_min, new_max);
        }
        Msg::SchemeNameChanged(name) => {
            data.scheme_name = name;
        }
        Msg::SaveScheme => {
            if !data.scheme_name.trim().is_empty() && !data.editor.buckets().is_empty() {
                data.schemes.insert(
                    SchemeId::new_v4(),
                    CustomScheme {
                        name: mem::take(&mut data.scheme_name),
                        reference: data.chosen_system.clone(),
                        grades: data.editor.buckets().to_vec(),
                    },
                );
            }
        }
        Msg::RemoveScheme(scheme_id) => {
            data.schemes.shift_remove(&scheme_id);
        }

        Msg::UserNameChanged(name) => {
            data.user.name = name;
        }
        Msg::GroupNameChanged(name) => {
            data.group.name = name;
        }
        Msg::NewMemberNameChanged(name) => {
            data.new_member_name = name;
        }
        Msg::AddMember => {
            if !data.new_member_name.trim().is_empty() {
                let name = mem::take(&mut data.new_member_name);
                data.group.add_member(name);
            }
        }
        Msg::RemoveMember(member_id) => {
            data.group.members.shift_remove(&member_id);
        }

        Msg::NoOp => (),
    }

    // Snapshot the whole state after every cycle, like it or not.
    if let Err(err) = LocalStorage::insert(STORAGE_KEY, &model.data) {
        error!("failed to persist state", err);
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> Vec<Node<Msg>> {
    let data = &model.data;
    nodes![
        view_header(data.page, &data.user),
        match data.page {
            Page::Log => view_log_page(data),
            Page::Boulders => view_boulders_page(data, &model.refs),
            Page::Places => view_places_page(data),
            Page::Grades => view_grades_page(data),
            Page::Group => view_group_page(&data.user, &data.group, &data.new_member_name),
        },
        view_footer(),
    ]
}

// ------ header ------

fn view_header(page: Page, user: &User) -> Node<Msg> {
    header![
        C!["header"],
        h1!["cragbook"],
        span![C!["who"], user.display_name().to_string()],
        nav![
            C!["pages"],
            PAGES.iter().map(|&(label, target)| {
                button![
                    C!["nav-button", IF!(page == target => "active")],
                    ev(Ev::Click, move |_| Msg::PageChanged(target)),
                    label
                ]
            }),
        ],
    ]
}

// ------ log page ------

fn view_log_page(data: &Data) -> Node<Msg> {
    section![
        C!["log"],
        view_session_controls(data),
        view_session_list(data),
        view_send_summary(data),
    ]
}

fn view_session_controls(data: &Data) -> Node<Msg> {
    match data.active_session.and_then(|session_id| data.sessions.get(&session_id)) {
        Some(session) => {
            let place = data
                .places
                .get(&session.place_id)
                .map_or_else(|| "?".to_string(), |place| place.name.clone());
            let started = Utc.timestamp(session.started, 0);
            div![
                C!["session-controls", "open"],
                span![C!["where"], place],
                span![
                    C!["since"],
                    format!("started {}", util::time_ago(started, Utc::now()))
                ],
                button![
                    C!["end-session"],
                    ev(Ev::Click, |_| Msg::EndSession),
                    "End session"
                ],
            ]
        }
        None => div![
            C!["session-controls"],
            select![
                C!["place-select"],
                option![attrs! {At::Value => ""}, "where to?"],
                data.places.iter().map(|(place_id, place)| {
                    option![
                        attrs! {
                            At::Value => place_id.to_string(),
                            At::Selected => (data.session_place == Some(*place_id)).as_at_value(),
                        },
                        place.name.clone()
                    ]
                }),
                input_ev(Ev::Change, Msg::ChooseSessionPlace),
            ],
            button![
                C!["start-session"],
                attrs! {At::Disabled => data.session_place.is_none().as_at_value()},
                ev(Ev::Click, |_| Msg::StartSession),
                "Start session"
            ],
        ],
    }
}

fn view_session_list(data: &Data) -> Node<Msg> {
    if data.sessions.is_empty() {
        return ul![C!["session-list"]];
    }
    ul![
        C!["session-list"],
        data.sessions
            .iter()
            .rev()
            .map(|(session_id, session)| view_session(session_id, session, data)),
    ]
}

fn view_session(session_id: &SessionId, session: &Session, data: &Data) -> Node<Msg> {
    let place = data
        .places
        .get(&session.place_id)
        .map_or_else(|| "?".to_string(), |place| place.name.clone());
    let (sends, attempts) = stats::session_tally(data.boulders.values(), *session_id);

    li![
        C!["session", IF!(session.is_open() => "open")],
        span![C!["day"], util::format_day(session.started)],
        label![place],
        span![
            C!["length"],
            if session.is_open() {
                "in progress".to_string()
            } else {
                util::format_duration(session.duration_secs(Utc::now().timestamp()))
            }
        ],
        span![C!["tally"], format!("{} sent, {} tries", sends, attempts)],
        button![
            C!["destroy"],
            ev(
                Ev::Click,
                enc!((session_id) move |_| Msg::RemoveSession(session_id))
            )
        ],
    ]
}

fn view_send_summary(data: &Data) -> Node<Msg> {
    let systems = GradeSystem::defaults();
    let scale = match systems.get(BOULDER_SCALE) {
        Some(scale) => scale,
        None => return empty![],
    };
    let counts = stats::sends_by_grade(data.boulders.values(), scale);
    let hardest = stats::hardest_send(data.boulders.values(), scale);

    div![
        C!["send-summary"],
        counts
            .iter()
            .map(|(label, count)| span![C!["grade-chip"], format!("{} x {}", label, count)]),
        match hardest {
            Some(label) => span![C!["hardest"], format!("best {}", label)],
            None => empty![],
        },
    ]
}

// ------ boulders page ------

fn view_boulders_page(data: &Data, refs: &Refs) -> Node<Msg> {
    section![
        C!["boulders"],
        view_boulder_form(data),
        view_boulder_list(data, refs),
    ]
}

fn view_boulder_form(data: &Data) -> Node<Msg> {
    let systems = GradeSystem::defaults();
    div![
        C!["new-boulder"],
        input![
            C!["new-boulder-title"],
            attrs! {
                At::Placeholder => "Description of boulder";
                At::AutoFocus => true.as_at_value();
                At::Value => data.new_boulder_title.clone();
            },
            keyboard_ev(Ev::KeyDown, |keyboard_event| {
                if keyboard_event.key_code() == ENTER_KEY {
                    Msg::CreateNewBoulder
                } else {
                    Msg::NoOp
                }
            }),
            input_ev(Ev::Input, Msg::NewBoulderTitleChanged),
        ],
        view_color_chooser(data.choosing_color, &data.chosen_color),
        select![
            C!["grade-select"],
            option![attrs! {At::Value => ""}, "grade?"],
            systems.get(BOULDER_SCALE).iter().flat_map(|system| {
                system.grades.iter().map(|grade| {
                    option![
                        attrs! {
                            At::Value => grade.label.clone(),
                            At::Selected => (data.chosen_grade == grade.label).as_at_value(),
                        },
                        grade.label.clone()
                    ]
                })
            }),
            input_ev(Ev::Change, Msg::ChooseGrade),
        ],
        select![
            C!["place-select"],
            option![attrs! {At::Value => ""}, "place?"],
            data.places.iter().map(|(place_id, place)| {
                option![
                    attrs! {
                        At::Value => place_id.to_string(),
                        At::Selected => (data.chosen_place == Some(*place_id)).as_at_value(),
                    },
                    place.name.clone()
                ]
            }),
            input_ev(Ev::Change, Msg::ChoosePlace),
        ],
    ]
}

fn view_color_chooser(choosing_color: bool, chosen_color: &str) -> Vec<Node<Msg>> {
    let colors = HoldColor::defaults();
    let chosen_hex = colors
        .get(chosen_color)
        .map_or_else(|| "#999".to_string(), |color| color.hex.clone());
    nodes![
        div![
            C!["color-chooser", IF!(choosing_color => "choosing-color")],
            colors.iter().map(|(key, color)| {
                div![
                    C!["color-swatch", IF!(chosen_color == key.as_str() => "active")],
                    style! {St::BackgroundColor => color.hex.clone()},
                    ev(Ev::Click, enc!((key) move |_| Msg::ChooseColor(key)))
                ]
            }),
        ],
        button![
            id!("toggle-color"),
            C!["toggle-color"],
            style! {St::BackgroundColor => chosen_hex},
            ev(Ev::Click, |_| Msg::ToggleChoosingColor),
            "\u{276f}"
        ],
    ]
}

fn view_boulder_list(data: &Data, refs: &Refs) -> Node<Msg> {
    if data.boulders.is_empty() {
        return section![C!["main"]];
    }
    let colors = HoldColor::defaults();
    let time = Utc::now();

    section![
        C!["main"],
        ul![
            C!["boulder-list"],
            data.boulders.iter().map(|(boulder_id, boulder)| {
                view_boulder(
                    boulder_id,
                    boulder,
                    &data.places,
                    &colors,
                    &data.editing_boulder,
                    &refs.editing_boulder_input,
                    &time,
                )
            }),
        ],
    ]
}

fn view_boulder(
    boulder_id: &BoulderId,
    boulder: &Boulder,
    places: &IndexMap<PlaceId, Place>,
    colors: &IndexMap<String, HoldColor>,
    editing_boulder: &Option<EditingBoulder>,
    editing_boulder_input: &ElRef<HtmlInputElement>,
    time: &DateTime<Utc>,
) -> Node<Msg> {
    let flag_hex = colors
        .get(&boulder.color)
        .map_or_else(|| "#999".to_string(), |color| color.hex.clone());
    let place = boulder
        .place_id
        .and_then(|place_id| places.get(&place_id))
        .map_or_else(String::new, |place| place.name.clone());

    li![
        C![
            IF!(boulder.is_sent() => "completed"),
            IF!(matches!(editing_boulder, Some(editing) if &editing.id == boulder_id) => "editing"),
        ],
        div![
            C!["view"],
            div![
                C!["color-flag"],
                style! {St::BackgroundColor => flag_hex},
            ],
            button![
                C!["tick-button"],
                ev(
                    Ev::Click,
                    enc!((boulder_id) move |_| Msg::AddAscentToBoulder(boulder_id, AscentStyle::Flash))
                ),
                "Fl"
            ],
            button![
                C!["tick-button"],
                ev(
                    Ev::Click,
                    enc!((boulder_id) move |_| Msg::AddAscentToBoulder(boulder_id, AscentStyle::Send))
                ),
                "Snd"
            ],
            button![
                C!["tick-button"],
                ev(
                    Ev::Click,
                    enc!((boulder_id) move |_| Msg::AddAscentToBoulder(boulder_id, AscentStyle::Attempt))
                ),
                "Att"
            ],
            label![
                ev(
                    Ev::DblClick,
                    enc!((boulder_id) move |_| Msg::StartBoulderEdit(boulder_id))
                ),
                boulder.title.clone()
            ],
            span![C!["grade"], boulder.grade.clone()],
            span![C!["where"], place],
            label![format!(
                "{}",
                if boulder.num_sends() > 0 {
                    boulder.num_sends()
                } else {
                    boulder.num_attempts()
                }
            )],
            label![boulder.last_ascent().map_or_else(String::new, |ascent| {
                util::time_ago(Utc.timestamp(ascent.timestamp, 0), *time)
            })],
            button![
                C!["destroy"],
                ev(
                    Ev::Click,
                    enc!((boulder_id) move |_| Msg::RemoveBoulder(boulder_id))
                )
            ]
        ],
        match editing_boulder {
            Some(editing_boulder) if &editing_boulder.id == boulder_id => {
                input![
                    el_ref(editing_boulder_input),
                    C!["edit"],
                    attrs! {At::Value => editing_boulder.title.clone()},
                    ev(Ev::Blur, |_| Msg::SaveEditingBoulder),
                    input_ev(Ev::Input, Msg::EditingBoulderTitleChanged),
                    keyboard_ev(Ev::KeyDown, |keyboard_event| {
                        let code = keyboard_event.key_code();
                        if code == ENTER_KEY {
                            Msg::SaveEditingBoulder
                        } else if code == ESC_KEY {
                            Msg::CancelBoulderEdit
                        } else {
                            Msg::NoOp
                        }
                    }),
                ]
            }
            _ => empty![],
        }
    ]
}

// ------ places page ------

fn view_places_page(data: &Data) -> Node<Msg> {
    section![
        C!["places"],
        div![
            C!["new-place"],
            input![
                attrs! {
                    At::Placeholder => "Name of gym or crag";
                    At::Value => data.new_place_name.clone();
                },
                keyboard_ev(Ev::KeyDown, |keyboard_event| {
                    if keyboard_event.key_code() == ENTER_KEY {
                        Msg::CreateNewPlace
                    } else {
                        Msg::NoOp
                    }
                }),
                input_ev(Ev::Input, Msg::NewPlaceNameChanged),
            ],
            button![
                C!["kind-toggle"],
                ev(Ev::Click, |_| Msg::NewPlaceKindToggled),
                data.new_place_kind.word()
            ],
            button![
                C!["add-place"],
                ev(Ev::Click, |_| Msg::CreateNewPlace),
                "Add"
            ],
        ],
        ul![
            C!["place-list"],
            data.places.iter().map(|(place_id, place)| {
                li![
                    C!["place"],
                    span![C!["place-kind"], place.kind.word()],
                    label![place.name.clone()],
                    button![
                        C!["destroy"],
                        ev(
                            Ev::Click,
                            enc!((place_id) move |_| Msg::RemovePlace(place_id))
                        )
                    ],
                ]
            }),
        ],
    ]
}

// ------ grades page ------

fn view_grades_page(data: &Data) -> Node<Msg> {
    section![
        C!["grades"],
        view_system_picker(&data.chosen_system),
        view_grade_editor(&data.editor),
        view_scheme_form(data),
        view_scheme_list(&data.schemes),
    ]
}

fn view_system_picker(chosen_system: &str) -> Node<Msg> {
    div![
        C!["system-picker"],
        select![
            option![
                attrs! {
                    At::Value => "",
                    At::Disabled => true.as_at_value(),
                    At::Selected => chosen_system.is_empty().as_at_value(),
                },
                "reference system?"
            ],
            GradeSystem::defaults().iter().map(|(key, system)| {
                option![
                    attrs! {
                        At::Value => key.clone(),
                        At::Selected => (chosen_system == key.as_str()).as_at_value(),
                    },
                    system.name.clone()
                ]
            }),
            input_ev(Ev::Change, Msg::SelectGradeSystem),
        ],
    ]
}

fn view_grade_editor(editor: &GradeEditor) -> Node<Msg> {
    let system = match editor.system() {
        Some(system) if editor.scale_len() > 0 => system,
        _ => {
            return div![
                C!["grade-editor", "empty"],
                p!["Pick a reference system to start carving grades."]
            ]
        }
    };
    let scale_top = editor.scale_len() - 1;
    let full = editor
        .buckets()
        .last()
        .map_or(false, |last| last.max_index == scale_top);

    div![
        C!["grade-editor"],
        ul![
            C!["bucket-list"],
            editor
                .buckets()
                .iter()
                .enumerate()
                .map(|(position, bucket)| view_bucket(position, bucket, system, scale_top)),
        ],
        button![
            C!["add-bucket"],
            attrs! {At::Disabled => full.as_at_value()},
            ev(Ev::Click, |_| Msg::AddGradeBucket),
            "Add grade"
        ],
    ]
}

fn view_bucket(
    position: usize,
    bucket: &CustomGrade,
    system: &GradeSystem,
    scale_top: usize,
) -> Node<Msg> {
    let id = bucket.id;
    let (min_index, max_index) = (bucket.min_index, bucket.max_index);
    let covers = if min_index == max_index {
        system.label_at(min_index).to_string()
    } else {
        format!(
            "{} to {}",
            system.label_at(min_index),
            system.label_at(max_index)
        )
    };

    li![
        C!["bucket"],
        input![
            C!["bucket-label"],
            attrs! {
                At::Placeholder => "name";
                At::Value => bucket.label.clone();
            },
            input_ev(Ev::Input, move |label| Msg::GradeBucketLabelChanged(
                id, label
            )),
        ],
        span![C!["bucket-covers"], covers],
        // The first bucket is pinned to the scale origin; it only gets
        // the upper handle.
        if position == 0 {
            empty![]
        } else {
            input![
                C!["handle", "lower"],
                attrs! {
                    At::Type => "range",
                    At::Min => "0",
                    At::Max => scale_top.to_string(),
                    At::Value => min_index.to_string(),
                },
                input_ev(Ev::Input, move |value| match value.parse() {
                    Ok(new_min) => Msg::GradeHandleMoved(position, new_min, max_index),
                    Err(_) => Msg::NoOp,
                }),
            ]
        },
        input![
            C!["handle", "upper"],
            attrs! {
                At::Type => "range",
                At::Min => "0",
                At::Max => scale_top.to_string(),
                At::Value => max_index.to_string(),
            },
            input_ev(Ev::Input, move |value| match value.parse() {
                Ok(new_max) => Msg::GradeHandleMoved(position, min_index, new_max),
                Err(_) => Msg::NoOp,
            }),
        ],
        button![
            C!["destroy"],
            ev(Ev::Click, move |_| Msg::RemoveGradeBucket(id))
        ],
    ]
}

fn view_scheme_form(data: &Data) -> Node<Msg> {
    let incomplete =
        data.editor.buckets().is_empty() || data.scheme_name.trim().is_empty();
    div![
        C!["scheme-form"],
        input![
            attrs! {
                At::Placeholder => "scheme name";
                At::Value => data.scheme_name.clone();
            },
            input_ev(Ev::Input, Msg::SchemeNameChanged),
            keyboard_ev(Ev::KeyDown, |keyboard_event| {
                if keyboard_event.key_code() == ENTER_KEY {
                    Msg::SaveScheme
                } else {
                    Msg::NoOp
                }
            }),
        ],
        button![
            C!["save-scheme"],
            attrs! {At::Disabled => incomplete.as_at_value()},
            ev(Ev::Click, |_| Msg::SaveScheme),
            "Save grading scheme"
        ],
    ]
}

fn view_scheme_list(schemes: &IndexMap<SchemeId, CustomScheme>) -> Node<Msg> {
    ul![
        C!["scheme-list"],
        schemes.iter().map(|(scheme_id, scheme)| {
            let buckets = scheme
                .grades
                .iter()
                .map(|grade| {
                    if grade.label.is_empty() {
                        "(unnamed)"
                    } else {
                        grade.label.as_str()
                    }
                })
                .join(" / ");
            li![
                C!["scheme"],
                label![scheme.name.clone()],
                span![C!["reference"], scheme.reference.clone()],
                span![C!["buckets"], buckets],
                button![
                    C!["destroy"],
                    ev(
                        Ev::Click,
                        enc!((scheme_id) move |_| Msg::RemoveScheme(scheme_id))
                    )
                ],
            ]
        }),
    ]
}

// ------ group page ------

fn view_group_page(user: &User, group: &Group, new_member_name: &str) -> Node<Msg> {
    section![
        C!["group"],
        div![
            C!["profile"],
            label!["Climber"],
            input![
                attrs! {
                    At::Placeholder => "your name";
                    At::Value => user.name.clone();
                },
                input_ev(Ev::Input, Msg::UserNameChanged),
            ],
        ],
        div![
            C!["group-name"],
            label!["Group"],
            input![
                attrs! {At::Value => group.name.clone()},
                input_ev(Ev::Input, Msg::GroupNameChanged),
            ],
        ],
        div![
            C!["new-member"],
            input![
                attrs! {
                    At::Placeholder => "invite by name";
                    At::Value => new_member_name.to_string();
                },
                input_ev(Ev::Input, Msg::NewMemberNameChanged),
                keyboard_ev(Ev::KeyDown, |keyboard_event| {
                    if keyboard_event.key_code() == ENTER_KEY {
                        Msg::AddMember
                    } else {
                        Msg::NoOp
                    }
                }),
            ],
            button![ev(Ev::Click, |_| Msg::AddMember), "Add"],
        ],
        ul![
            C!["member-list"],
            group.members.iter().map(|(member_id, member)| {
                li![
                    C!["member"],
                    label![member.name.clone()],
                    span![
                        C!["role"],
                        match member.role {
                            Role::Owner => "owner",
                            Role::Member => "member",
                        }
                    ],
                    button![
                        C!["destroy"],
                        ev(
                            Ev::Click,
                            enc!((member_id) move |_| Msg::RemoveMember(member_id))
                        )
                    ],
                ]
            }),
        ],
    ]
}

// ------ footer ------

fn view_footer() -> Node<Msg> {
    footer![C!["footer"]]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view);
}
