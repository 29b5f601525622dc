//! Built-in route list of the asset management console.

use super::RouteDescriptor;

/// Name given to the root layout entry, which the console declares unnamed.
pub const LAYOUT_ROUTE: &str = "app-layout";

/// `(path, name, view, requires_auth)` in declaration order.
const APPLICATION_ROUTES: &[(&str, &str, &str, bool)] = &[
    ("/", LAYOUT_ROUTE, "layout/AppLayout", false),
    ("/dashboard", "dashboard", "views/Dashboard", true),
    ("/uikit/formlayout", "formlayout", "views/uikit/FormLayout", true),
    ("/assets", "assets", "views/pages/assets/AssetList", true),
    ("/assets/:id/edit", "editAsset", "views/pages/assets/AssetEdit", true),
    ("/assets/:id", "detailAsset", "views/pages/assets/AssetDetail", true),
    ("/asset-categories", "asset-categories", "views/AssetCategoryList", false),
    ("/asset-types", "asset-types", "views/asset/AssetTypeList", false),
    ("/asset-conditions", "asset-conditions", "views/pages/assets/AssetConditionList", false),
    ("/asset-locations", "lokasi-aset", "views/pages/assets/AssetLocationList", false),
    ("/assets/documents", "assets/documents", "views/pages/assets/AssetDocument", false),
    ("/assets/scanner", "assets/scanner", "views/pages/assets/AssetQrScanner", false),
    ("/assets/asset-loans", "assets/asset-loans", "views/pages/assets/AssetLoan", false),
    ("/assets/asset-usages", "assets/asset-usages", "views/pages/assets/AssetUsage", false),
    ("/uikit/button", "button", "views/uikit/ButtonDoc", false),
    ("/uikit/table", "table", "views/uikit/TableDoc", false),
    ("/uikit/list", "list", "views/uikit/ListDoc", false),
    ("/uikit/tree", "tree", "views/uikit/TreeDoc", false),
    ("/uikit/panel", "panel", "views/uikit/PanelsDoc", false),
    ("/uikit/overlay", "overlay", "views/uikit/OverlayDoc", false),
    ("/uikit/media", "media", "views/uikit/MediaDoc", false),
    ("/uikit/message", "message", "views/uikit/MessagesDoc", false),
    ("/uikit/file", "file", "views/uikit/FileDoc", false),
    ("/uikit/menu", "menu", "views/uikit/MenuDoc", false),
    ("/uikit/charts", "charts", "views/uikit/ChartDoc", false),
    ("/uikit/misc", "misc", "views/uikit/MiscDoc", false),
    ("/uikit/timeline", "timeline", "views/uikit/TimelineDoc", false),
    ("/pages/empty", "empty", "views/pages/Empty", false),
    ("/pages/crud", "crud", "views/pages/Crud", false),
    ("/documentation", "documentation", "views/pages/Documentation", false),
    ("/landing", "landing", "views/pages/Landing", false),
    ("/pages/notfound", "notfound", "views/pages/NotFound", false),
    ("/auth/login", "login", "views/pages/auth/Login", false),
    ("/auth/access", "accessDenied", "views/pages/auth/Access", false),
    ("/auth/error", "error", "views/pages/auth/Error", false),
];

pub(super) fn application_routes() -> Vec<RouteDescriptor> {
    APPLICATION_ROUTES
        .iter()
        .map(|&(path, name, view, requires_auth)| RouteDescriptor {
            path: path.to_owned(),
            name: name.to_owned(),
            view: view.to_owned(),
            requires_auth,
        })
        .collect()
}
