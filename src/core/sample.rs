//! Built-in menu shown by the `megamenu` binary.

use log::info;

use crate::core::node::{ClickEffectError, NavNode};

pub fn sample_menu() -> Vec<NavNode> {
    vec![
        NavNode::new("Home").with_icon("home").with_url("/"),
        NavNode::new("Starred")
            .with_icon("star")
            .with_empty_message("starred-empty"),
        NavNode::new("Dashboards")
            .with_icon("apps")
            .with_url("/dashboards")
            .with_children(vec![
                NavNode::new("Browse").with_url("/dashboards"),
                NavNode::new("Playlists").with_url("/playlists"),
                NavNode::divider(),
                NavNode::new("Snapshots").with_url("/dashboard/snapshots"),
                NavNode::new("Library panels")
                    .with_url("/library-panels")
                    .with_children(vec![NavNode::new("Shared panels").with_url("/library-panels/shared")]),
                NavNode::new("New dashboard")
                    .with_icon("plus")
                    .with_url("/dashboard/new")
                    .on_click(|| {
                        info!("New dashboard requested");
                        Ok(())
                    }),
            ]),
        NavNode::new("Explore")
            .with_icon("compass")
            .with_url("/explore")
            .with_highlight("New!"),
        NavNode::new("Alerting")
            .with_icon("bell")
            .with_url("/alerting")
            .with_children(vec![
                NavNode::new("Alert rules").with_url("/alerting/list"),
                NavNode::new("Contact points").with_url("/alerting/notifications"),
                NavNode::new("Notification policies").with_url("/alerting/routes"),
            ]),
        NavNode::new("Bookmarks")
            .with_icon("bookmark")
            .with_empty_message("bookmarks-empty"),
        NavNode::new("Administration")
            .with_icon("cog")
            .with_url("/admin")
            .with_children(vec![
                NavNode::new("Users").with_icon("user").with_url("/admin/users"),
                NavNode::new("Plugins").with_url("/plugins"),
                NavNode::divider(),
                NavNode::new("Reload provisioning").on_click(|| {
                    Err(ClickEffectError(
                        "provisioning service unavailable".to_string(),
                    ))
                }),
            ]),
        NavNode::new("Help")
            .with_hidden_icon("link")
            .with_url("https://example.com/docs")
            .with_target("_blank"),
    ]
}
