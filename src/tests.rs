#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{TEST_API_BASE_URL, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::metrics::{FORECAST_METRICS, REPORT_METRICS, checkbox_id};
    use common::{Page, ids};

    fn server() -> TestServer {
        TestServer::new(setup_test_app()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = server().get("/health").await;

        response.assert_status(StatusCode::OK);
        let health: HealthResponse = response.json();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.api_base_url, TEST_API_BASE_URL);
    }

    #[tokio::test]
    async fn test_every_page_renders_with_its_key() {
        let server = server();

        for page in Page::ALL {
            let response = server.get(page.path()).await;
            response.assert_status(StatusCode::OK);

            let body = response.text();
            assert!(body.contains(&format!(r#"data-page="{}""#, page.key())), "{page}");
            assert!(body.contains(&format!(r#"data-api-base="{}""#, TEST_API_BASE_URL)), "{page}");
            assert!(body.contains(&format!(r#"id="{}""#, ids::SIDEBAR_TOGGLE)), "{page}");
            assert!(body.contains(&format!(r#"id="{}""#, ids::MAIN_CONTENT)), "{page}");
        }
    }

    #[tokio::test]
    async fn test_overview_has_kpis_and_charts() {
        let response = server().get("/").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        for id in [
            ids::KPI_TOTAL_CONSUMPTION,
            ids::KPI_NEXT_DAY_FORECAST,
            ids::MAIN_CHART,
            ids::MAIN_CHART_DATES,
            ids::UTILIZATION_CHART,
            ids::INTAKE_CHART,
        ] {
            assert!(body.contains(&format!(r#"id="{}""#, id)), "missing {id}");
        }
    }

    #[tokio::test]
    async fn test_forecasting_page_has_map_and_horizons() {
        let response = server().get("/forecasting").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        assert!(body.contains("Total Consumption Forecast"));
        assert!(body.contains(&format!(r#"id="{}""#, ids::HORIZON_SELECT)));
        for metric in FORECAST_METRICS {
            assert!(body.contains(&format!(r#"data-metric="{}""#, metric.id)));
        }
    }

    #[tokio::test]
    async fn test_report_page_has_form_controls() {
        let response = server().get("/report").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        assert!(body.contains(&format!(r#"id="{}""#, ids::REPORT_FORM)));
        assert!(body.contains(&format!(r#"id="{}""#, ids::STATUS_AREA)));
        assert!(body.contains(&format!(r#"id="{}""#, ids::DOWNLOAD_LINK)));
        for metric in REPORT_METRICS {
            assert!(body.contains(&format!(r#"id="{}""#, checkbox_id(metric))), "missing {metric}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = server().get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("/does-not-exist"));
    }

    #[tokio::test]
    async fn test_stylesheet_is_served() {
        let response = server().get("/static/css/dashboard.css").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains(".sidebar"));
    }
}
