use maud::{html, Markup};

/// User-visible notification rendered at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub success: bool,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            success: true,
            title: title.into(),
            description: description.map(str::to_string),
        }
    }

    pub fn error(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            success: false,
            title: title.into(),
            description: description.map(str::to_string),
        }
    }
}

pub fn notice_banner(notice: &Notice) -> Markup {
    let class = if notice.success {
        "notice notice-success"
    } else {
        "notice notice-error"
    };

    html! {
        div class=(class) role=(if notice.success { "status" } else { "alert" }) {
            strong { (notice.title) }
            @if let Some(desc) = &notice.description {
                p { (desc) }
            }
        }
    }
}
