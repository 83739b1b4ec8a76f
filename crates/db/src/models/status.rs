//! Rust mirrors of the PostgreSQL enum types declared in the migrations.
//!
//! Each enum maps to its database type through `sqlx::Type` and to its wire
//! form through serde; both use the same snake_case labels.

use serde::{Deserialize, Serialize};

macro_rules! define_pg_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $pg_type:tt {
            $( $(#[$vmeta:meta])* $variant:ident => $label:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
        #[sqlx(type_name = $pg_type, rename_all = "snake_case")]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The label stored in the database and sent over the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_pg_enum! {
    /// Project lifecycle status.
    ProjectStatus as "project_status" {
        Planning => "planning",
        Active => "active",
        OnHold => "on_hold",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

define_pg_enum! {
    /// Role a member plays on a project.
    ProjectRole as "project_role" {
        Owner => "owner",
        /// Construction management (Manajemen Konstruksi).
        Mk => "mk",
        MainContractor => "main_contractor",
        SubContractor => "sub_contractor",
        Designer => "designer",
        /// Quantity surveyor.
        Qs => "qs",
    }
}

define_pg_enum! {
    /// Kind of project document.
    DocumentType as "document_type" {
        Drawing => "drawing",
        WorkMethod => "work_method",
        MaterialSpec => "material_spec",
        Permit => "permit",
        Report => "report",
        Other => "other",
    }
}

define_pg_enum! {
    /// Review state of a document, also used for each approval decision.
    ApprovalStatus as "approval_status" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        RevisionRequired => "revision_required",
    }
}

define_pg_enum! {
    /// Payment application (termin) status.
    PaymentStatus as "payment_status" {
        Draft => "draft",
        Submitted => "submitted",
        UnderReview => "under_review",
        Approved => "approved",
        Rejected => "rejected",
        Paid => "paid",
    }
}

define_pg_enum! {
    /// Meeting lifecycle status.
    MeetingStatus as "meeting_status" {
        Scheduled => "scheduled",
        Ongoing => "ongoing",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}
