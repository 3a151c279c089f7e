//! Database entities

pub mod curator_report;
pub mod direction;
pub mod document;
pub mod event;
pub mod event_funding_source;
pub mod event_media;
pub mod event_participant_category;
pub mod format;
pub mod funding_source;
pub mod invited_guest;
pub mod level;
pub mod media_link;
pub mod participant_category;
pub mod report_participant;
pub mod student;
pub mod student_group;
pub mod student_tag;
pub mod student_tag_assignment;
pub mod user;

pub use curator_report::Entity as CuratorReport;
pub use direction::Entity as Direction;
pub use document::Entity as Document;
pub use event::Entity as Event;
pub use event_funding_source::Entity as EventFundingSource;
pub use event_media::Entity as EventMedia;
pub use event_participant_category::Entity as EventParticipantCategory;
pub use format::Entity as Format;
pub use funding_source::Entity as FundingSource;
pub use invited_guest::Entity as InvitedGuest;
pub use level::Entity as Level;
pub use media_link::Entity as MediaLink;
pub use participant_category::Entity as ParticipantCategory;
pub use report_participant::Entity as ReportParticipant;
pub use student::Entity as Student;
pub use student_group::Entity as StudentGroup;
pub use student_tag::Entity as StudentTag;
pub use student_tag_assignment::Entity as StudentTagAssignment;
pub use user::Entity as User;

pub mod prelude {
    pub use super::curator_report::Entity as CuratorReport;
    pub use super::direction::Entity as Direction;
    pub use super::document::Entity as Document;
    pub use super::event::Entity as Event;
    pub use super::event_funding_source::Entity as EventFundingSource;
    pub use super::event_media::Entity as EventMedia;
    pub use super::event_participant_category::Entity as EventParticipantCategory;
    pub use super::format::Entity as Format;
    pub use super::funding_source::Entity as FundingSource;
    pub use super::invited_guest::Entity as InvitedGuest;
    pub use super::level::Entity as Level;
    pub use super::media_link::Entity as MediaLink;
    pub use super::participant_category::Entity as ParticipantCategory;
    pub use super::report_participant::Entity as ReportParticipant;
    pub use super::student::Entity as Student;
    pub use super::student_group::Entity as StudentGroup;
    pub use super::student_tag::Entity as StudentTag;
    pub use super::student_tag_assignment::Entity as StudentTagAssignment;
    pub use super::user::Entity as User;
}
