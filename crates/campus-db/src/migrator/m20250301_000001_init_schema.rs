//! Consolidated initial schema migration

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // 1. users
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::Email, 255).unique_key())
                    .col(string_len(User::PasswordHash, 255))
                    .col(string_len(User::FullName, 255))
                    .col(string_len_null(User::Phone, 64))
                    .col(string_len_null(User::Position, 255))
                    .col(string_len(User::Role, 32).default("curator"))
                    .col(boolean(User::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(User::Table)
                    .col(User::Email)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 2. student_groups
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(StudentGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentGroup::Id))
                    .col(string_len(StudentGroup::Name, 255).unique_key())
                    .col(integer_null(StudentGroup::CuratorUserId))
                    .col(string_len_null(StudentGroup::Faculty, 255))
                    .col(integer_null(StudentGroup::AdmissionYear))
                    .col(
                        timestamp_with_time_zone(StudentGroup::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_groups_curator_user_id")
                            .from(StudentGroup::Table, StudentGroup::CuratorUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_groups_curator_user_id")
                    .table(StudentGroup::Table)
                    .col(StudentGroup::CuratorUserId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 3. students
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len(Student::FullName, 255))
                    .col(date_null(Student::BirthDate))
                    .col(integer(Student::GroupId))
                    .col(string_len_null(Student::Phone, 64))
                    .col(string_len_null(Student::Email, 255).unique_key())
                    .col(string_len_null(Student::CardNumber, 64).unique_key())
                    .col(boolean(Student::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Student::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_group_id")
                            .from(Student::Table, Student::GroupId)
                            .to(StudentGroup::Table, StudentGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_group_id")
                    .table(Student::Table)
                    .col(Student::GroupId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 4. student_tags + assignments
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(StudentTag::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentTag::Id))
                    .col(string_len(StudentTag::Name, 255).unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentTagAssignment::Table)
                    .if_not_exists()
                    .col(integer(StudentTagAssignment::StudentId))
                    .col(integer(StudentTagAssignment::TagId))
                    .col(date(StudentTagAssignment::AssignedAt))
                    .col(text_null(StudentTagAssignment::Notes))
                    .primary_key(
                        Index::create()
                            .col(StudentTagAssignment::StudentId)
                            .col(StudentTagAssignment::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_tag_assignments_student_id")
                            .from(StudentTagAssignment::Table, StudentTagAssignment::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_tag_assignments_tag_id")
                            .from(StudentTagAssignment::Table, StudentTagAssignment::TagId)
                            .to(StudentTag::Table, StudentTag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_tag_assignments_tag_id")
                    .table(StudentTagAssignment::Table)
                    .col(StudentTagAssignment::TagId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 5. lookup tables
        // ============================================================
        for (table, name_col) in [
            (Direction::Table.into_iden(), Direction::Name.into_iden()),
            (Level::Table.into_iden(), Level::Name.into_iden()),
            (Format::Table.into_iden(), Format::Name.into_iden()),
            (
                ParticipantCategory::Table.into_iden(),
                ParticipantCategory::Name.into_iden(),
            ),
            (
                FundingSource::Table.into_iden(),
                FundingSource::Name.into_iden(),
            ),
        ] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(pk_auto(Alias::new("id")))
                        .col(string_len(name_col, 255).unique_key())
                        .to_owned(),
                )
                .await?;
        }

        // ============================================================
        // 6. events
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string_len(Event::Title, 512))
                    .col(integer_null(Event::DirectionId))
                    .col(integer_null(Event::LevelId))
                    .col(integer_null(Event::FormatId))
                    .col(date(Event::StartDate))
                    .col(date_null(Event::EndDate))
                    .col(string_len_null(Event::Location, 512))
                    .col(string_len_null(Event::Address, 512))
                    .col(integer_null(Event::ParticipantsCount))
                    .col(boolean(Event::HasForeigners).default(false))
                    .col(integer_null(Event::ForeignersCount))
                    .col(boolean(Event::HasMinors).default(false))
                    .col(integer_null(Event::MinorsCount))
                    .col(text(Event::Description))
                    .col(string_len(Event::ResponsibleFullName, 255))
                    .col(string_len_null(Event::ResponsiblePhone, 64))
                    .col(string_len_null(Event::ResponsibleEmail, 255))
                    .col(double_null(Event::FundingAmount))
                    .col(string_len(Event::Status, 32).default("Planned"))
                    .col(integer(Event::CreatedByUserId))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_direction_id")
                            .from(Event::Table, Event::DirectionId)
                            .to(Direction::Table, Direction::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_level_id")
                            .from(Event::Table, Event::LevelId)
                            .to(Level::Table, Level::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_format_id")
                            .from(Event::Table, Event::FormatId)
                            .to(Format::Table, Format::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_created_by_user_id")
                            .from(Event::Table, Event::CreatedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_created_by_user_id")
                    .table(Event::Table)
                    .col(Event::CreatedByUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_status")
                    .table(Event::Table)
                    .col(Event::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_start_date")
                    .table(Event::Table)
                    .col(Event::StartDate)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 7. event junctions (categories, funding sources)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(EventParticipantCategory::Table)
                    .if_not_exists()
                    .col(integer(EventParticipantCategory::EventId))
                    .col(integer(EventParticipantCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(EventParticipantCategory::EventId)
                            .col(EventParticipantCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_categories_event_id")
                            .from(
                                EventParticipantCategory::Table,
                                EventParticipantCategory::EventId,
                            )
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_categories_category_id")
                            .from(
                                EventParticipantCategory::Table,
                                EventParticipantCategory::CategoryId,
                            )
                            .to(ParticipantCategory::Table, ParticipantCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventFundingSource::Table)
                    .if_not_exists()
                    .col(integer(EventFundingSource::EventId))
                    .col(integer(EventFundingSource::SourceId))
                    .primary_key(
                        Index::create()
                            .col(EventFundingSource::EventId)
                            .col(EventFundingSource::SourceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_funding_sources_event_id")
                            .from(EventFundingSource::Table, EventFundingSource::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_funding_sources_source_id")
                            .from(EventFundingSource::Table, EventFundingSource::SourceId)
                            .to(FundingSource::Table, FundingSource::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 8. event children (media links, media, invited guests)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(MediaLink::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaLink::Id))
                    .col(integer(MediaLink::EventId))
                    .col(string_len(MediaLink::Url, 2048))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_links_event_id")
                            .from(MediaLink::Table, MediaLink::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_media_links_event_id")
                    .table(MediaLink::Table)
                    .col(MediaLink::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventMedia::Table)
                    .if_not_exists()
                    .col(pk_auto(EventMedia::Id))
                    .col(integer(EventMedia::EventId))
                    .col(string_len(EventMedia::MediaType, 16))
                    .col(string_len(EventMedia::Url, 2048))
                    .col(text_null(EventMedia::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_media_event_id")
                            .from(EventMedia::Table, EventMedia::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_event_media_event_id")
                    .table(EventMedia::Table)
                    .col(EventMedia::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InvitedGuest::Table)
                    .if_not_exists()
                    .col(pk_auto(InvitedGuest::Id))
                    .col(integer(InvitedGuest::EventId))
                    .col(string_len(InvitedGuest::FullName, 255))
                    .col(string_len_null(InvitedGuest::Organization, 255))
                    .col(string_len_null(InvitedGuest::Position, 255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invited_guests_event_id")
                            .from(InvitedGuest::Table, InvitedGuest::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invited_guests_event_id")
                    .table(InvitedGuest::Table)
                    .col(InvitedGuest::EventId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 9. curator_reports + participants
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(CuratorReport::Table)
                    .if_not_exists()
                    .col(pk_auto(CuratorReport::Id))
                    .col(integer(CuratorReport::CuratorUserId))
                    .col(string_len(CuratorReport::Title, 512))
                    .col(date(CuratorReport::ReportDate))
                    .col(string_len_null(CuratorReport::Location, 512))
                    .col(string_len_null(CuratorReport::Direction, 255))
                    .col(text_null(CuratorReport::GuestInfo))
                    .col(integer_null(CuratorReport::ForeignersCount))
                    .col(integer_null(CuratorReport::MinorsCount))
                    .col(double_null(CuratorReport::DurationHours))
                    .col(text_null(CuratorReport::MediaRefs))
                    .col(integer_null(CuratorReport::EventId))
                    .col(
                        timestamp_with_time_zone(CuratorReport::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_curator_reports_curator_user_id")
                            .from(CuratorReport::Table, CuratorReport::CuratorUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_curator_reports_event_id")
                            .from(CuratorReport::Table, CuratorReport::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_curator_reports_curator_user_id")
                    .table(CuratorReport::Table)
                    .col(CuratorReport::CuratorUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReportParticipant::Table)
                    .if_not_exists()
                    .col(integer(ReportParticipant::ReportId))
                    .col(integer(ReportParticipant::StudentId))
                    .primary_key(
                        Index::create()
                            .col(ReportParticipant::ReportId)
                            .col(ReportParticipant::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_participants_report_id")
                            .from(ReportParticipant::Table, ReportParticipant::ReportId)
                            .to(CuratorReport::Table, CuratorReport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_participants_student_id")
                            .from(ReportParticipant::Table, ReportParticipant::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // 10. documents
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string_len(Document::Title, 512))
                    .col(text_null(Document::Description))
                    .col(string_len_null(Document::Category, 255))
                    .col(string_len(Document::Url, 2048))
                    .col(
                        timestamp_with_time_zone(Document::UploadedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer_null(Document::UploadedByUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_uploaded_by_user_id")
                            .from(Document::Table, Document::UploadedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order (respecting foreign keys)
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReportParticipant::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CuratorReport::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InvitedGuest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventMedia::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MediaLink::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventFundingSource::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(EventParticipantCategory::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FundingSource::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ParticipantCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Format::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Level::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Direction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentTagAssignment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentTag::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Phone,
    Position,
    Role,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentGroup {
    #[sea_orm(iden = "student_groups")]
    Table,
    Id,
    Name,
    CuratorUserId,
    Faculty,
    AdmissionYear,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    FullName,
    BirthDate,
    GroupId,
    Phone,
    Email,
    CardNumber,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum StudentTag {
    #[sea_orm(iden = "student_tags")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum StudentTagAssignment {
    #[sea_orm(iden = "student_tag_assignments")]
    Table,
    StudentId,
    TagId,
    AssignedAt,
    Notes,
}

#[derive(DeriveIden)]
enum Direction {
    #[sea_orm(iden = "directions")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Level {
    #[sea_orm(iden = "levels")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Format {
    #[sea_orm(iden = "formats")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ParticipantCategory {
    #[sea_orm(iden = "participant_categories")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum FundingSource {
    #[sea_orm(iden = "funding_sources")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Title,
    DirectionId,
    LevelId,
    FormatId,
    StartDate,
    EndDate,
    Location,
    Address,
    ParticipantsCount,
    HasForeigners,
    ForeignersCount,
    HasMinors,
    MinorsCount,
    Description,
    ResponsibleFullName,
    ResponsiblePhone,
    ResponsibleEmail,
    FundingAmount,
    Status,
    CreatedByUserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EventParticipantCategory {
    #[sea_orm(iden = "event_participant_categories")]
    Table,
    EventId,
    CategoryId,
}

#[derive(DeriveIden)]
enum EventFundingSource {
    #[sea_orm(iden = "event_funding_sources")]
    Table,
    EventId,
    SourceId,
}

#[derive(DeriveIden)]
enum MediaLink {
    #[sea_orm(iden = "media_links")]
    Table,
    Id,
    EventId,
    Url,
}

#[derive(DeriveIden)]
enum EventMedia {
    #[sea_orm(iden = "event_media")]
    Table,
    Id,
    EventId,
    MediaType,
    Url,
    Description,
}

#[derive(DeriveIden)]
enum InvitedGuest {
    #[sea_orm(iden = "invited_guests")]
    Table,
    Id,
    EventId,
    FullName,
    Organization,
    Position,
}

#[derive(DeriveIden)]
enum CuratorReport {
    #[sea_orm(iden = "curator_reports")]
    Table,
    Id,
    CuratorUserId,
    Title,
    ReportDate,
    Location,
    Direction,
    GuestInfo,
    ForeignersCount,
    MinorsCount,
    DurationHours,
    MediaRefs,
    EventId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ReportParticipant {
    #[sea_orm(iden = "report_participants")]
    Table,
    ReportId,
    StudentId,
}

#[derive(DeriveIden)]
enum Document {
    #[sea_orm(iden = "documents")]
    Table,
    Id,
    Title,
    Description,
    Category,
    Url,
    UploadedAt,
    UploadedByUserId,
}
