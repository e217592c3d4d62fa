pub mod cmd {
    pub const SCREENS: &str = "taller screens";
    pub const DASHBOARD: &str = "taller dashboard";
    pub const CONSOLE: &str = "taller console";
    pub const CONFIG_INIT: &str = "taller config init";
    pub const CONFIG_SHOW: &str = "taller config show";
}

pub mod fmt {
    pub fn list(screen: &str) -> String {
        format!("taller list {}", screen)
    }

    pub fn list_page(screen: &str, page: usize) -> String {
        format!("taller list {} --page {}", screen, page)
    }

    pub fn show(screen: &str, id: u32) -> String {
        format!("taller show {} {}", screen, id)
    }

    pub fn create(screen: &str) -> String {
        format!("taller create {} --set <FIELD=VALUE>", screen)
    }

    pub fn delete_confirmed(screen: &str, ids: &[u32]) -> String {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        format!("taller delete {} {} --yes", screen, ids.join(" "))
    }
}
